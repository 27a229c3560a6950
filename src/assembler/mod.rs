//! Payslip assembly.
//!
//! The [`PayslipAssembler`] orchestrates the payroll calculator and the
//! template registry into a finalized, human-presentable [`Payslip`]: it
//! resolves the template, runs the calculation, validates and resolves every
//! template field, spells the net salary in words, and performs the
//! idempotent upsert against the payslip store. Registry and store are
//! injected dependencies; the assembler holds no state of its own and is
//! safe to share across threads.

mod amount_words;

pub use amount_words::amount_in_words;

use std::collections::BTreeMap;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::calculation::calculate_payroll;
use crate::config::StatutoryRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, CompanySnapshot, CompensationProfile, EmployeeSnapshot, PayPeriod, Payslip,
    PayslipStatus,
};
use crate::store::PayslipStore;
use crate::template::{
    FieldValue, TemplateField, TemplateRegistry, TemplateSchema, get_default, get_schema,
};

/// Everything the assembler needs to produce one payslip.
#[derive(Debug, Clone)]
pub struct AssembleRequest {
    /// Snapshot of the employee, pre-fetched by the caller.
    pub employee: EmployeeSnapshot,
    /// Snapshot of the issuing company, pre-fetched by the caller.
    pub company: CompanySnapshot,
    /// The employee's compensation profile for this period.
    pub profile: CompensationProfile,
    /// The employee's attendance for this period.
    pub attendance: AttendanceRecord,
    /// The pay period being processed.
    pub period: PayPeriod,
    /// Template to render against; `None` resolves the registry default.
    pub template_id: Option<String>,
    /// Caller-supplied values for template fields the engine cannot derive
    /// itself (e.g. a custom footer note). Never consulted for calculated
    /// fields.
    pub extra_fields: BTreeMap<String, FieldValue>,
}

/// Assembles finalized payslips from calculator output and a template.
///
/// # Example
///
/// ```no_run
/// use payslip_engine::assembler::PayslipAssembler;
/// use payslip_engine::config::StatutoryRates;
/// use payslip_engine::store::InMemoryStore;
/// use payslip_engine::template::InMemoryRegistry;
/// # fn request() -> payslip_engine::assembler::AssembleRequest { unimplemented!() }
///
/// let registry = InMemoryRegistry::with_reference_template();
/// let store = InMemoryStore::new();
/// let assembler = PayslipAssembler::new(&registry, &store, StatutoryRates::default());
/// let payslip = assembler.assemble(&request()).unwrap();
/// println!("{}", payslip.payslip_number);
/// ```
pub struct PayslipAssembler<'a> {
    registry: &'a dyn TemplateRegistry,
    store: &'a dyn PayslipStore,
    rates: StatutoryRates,
}

impl<'a> PayslipAssembler<'a> {
    /// Creates an assembler over the given registry, store, and statutory
    /// rates.
    pub fn new(
        registry: &'a dyn TemplateRegistry,
        store: &'a dyn PayslipStore,
        rates: StatutoryRates,
    ) -> Self {
        Self {
            registry,
            store,
            rates,
        }
    }

    /// Returns the statutory rates the assembler calculates with.
    pub fn rates(&self) -> &StatutoryRates {
        &self.rates
    }

    /// Produces and persists a payslip for one employee and period.
    ///
    /// Regenerating for the same employee/period overwrites the prior draft
    /// while its status is `generated` (idempotent upsert, stable record
    /// id); once the stored payslip is `approved` or `paid`, assembly fails
    /// with [`EngineError::PayslipAlreadyFinalized`].
    ///
    /// Calculator failures propagate unchanged.
    pub fn assemble(&self, request: &AssembleRequest) -> EngineResult<Payslip> {
        let template = match &request.template_id {
            Some(id) => get_schema(self.registry, id)?,
            None => get_default(self.registry)?,
        };

        let result = calculate_payroll(&request.profile, &request.attendance, &self.rates)?;

        let payslip_number = Payslip::number_for(
            request.period.year,
            request.period.month,
            &request.employee.id,
        );

        let rates = self.rates.with_overrides(&request.profile.overrides);
        let net_salary_in_words = amount_in_words(result.net_salary, rates.words_format);

        let mut fields = BTreeMap::new();
        for field in template.all_fields() {
            let value = if field.calculated {
                self.calculated_value(field, &result, &net_salary_in_words)?
            } else {
                self.resolve_field(field, request, &template, &result, &payslip_number)?
            };
            fields.insert(field.id.clone(), value);
        }

        let id = match self
            .store
            .find_by_employee_and_period(&request.employee.id, request.period.month, request.period.year)
        {
            Some(existing) if existing.is_finalized() => {
                return Err(EngineError::PayslipAlreadyFinalized {
                    payslip_number: existing.payslip_number,
                    status: existing.status.as_str().to_string(),
                });
            }
            // Regeneration keeps the draft's record id stable
            Some(existing) => existing.id,
            None => Uuid::new_v4(),
        };

        let payslip = Payslip {
            id,
            payslip_number: payslip_number.clone(),
            employee: request.employee.clone(),
            company: request.company.clone(),
            // Frozen copy: later registry edits cannot touch this payslip
            template,
            period: request.period,
            result,
            fields,
            net_salary_in_words,
            status: PayslipStatus::Generated,
            generated_at: Utc::now(),
        };

        let stored = self.store.upsert(payslip);
        info!(
            payslip_number = %stored.payslip_number,
            employee_id = %stored.employee.id,
            net_salary = %stored.result.net_salary,
            "generated payslip"
        );
        Ok(stored)
    }

    /// Computes the value of a `calculated: true` field. Calculated fields
    /// are never caller-controlled: any supplied value is ignored.
    fn calculated_value(
        &self,
        field: &TemplateField,
        result: &crate::models::PayrollResult,
        net_salary_in_words: &str,
    ) -> EngineResult<FieldValue> {
        match field.id.as_str() {
            "gross_salary" => Ok(FieldValue::Currency(result.gross_salary)),
            "total_deductions" => Ok(FieldValue::Currency(result.total_deductions)),
            "net_salary" => Ok(FieldValue::Currency(result.net_salary)),
            "net_salary_in_words" => Ok(FieldValue::Text(net_salary_in_words.to_string())),
            _ => Err(EngineError::IncompleteTemplateData {
                field: field.id.clone(),
            }),
        }
    }

    /// Resolves a non-calculated field from, in order: the calculator's
    /// earnings/deductions lines, the employee/company/period snapshots, and
    /// the caller's extra fields.
    fn resolve_field(
        &self,
        field: &TemplateField,
        request: &AssembleRequest,
        template: &TemplateSchema,
        result: &crate::models::PayrollResult,
        payslip_number: &str,
    ) -> EngineResult<FieldValue> {
        if let Some(amount) = result.earning(&field.id).or_else(|| result.deduction(&field.id)) {
            return Ok(FieldValue::Currency(amount));
        }

        // A declared earnings/deductions line with no computed amount (e.g.
        // TDS below its threshold) renders as zero rather than failing
        let declared_as_line = template
            .earnings
            .iter()
            .chain(template.deductions.iter())
            .any(|f| f.id == field.id);
        if declared_as_line {
            return Ok(FieldValue::Currency(Decimal::ZERO));
        }

        if let Some(value) = self.snapshot_value(&field.id, request, payslip_number) {
            return Ok(value);
        }

        if let Some(value) = request.extra_fields.get(&field.id) {
            if !value.matches(field.field_type) {
                return Err(EngineError::IncompleteTemplateData {
                    field: field.id.clone(),
                });
            }
            return Ok(value.clone());
        }

        Err(EngineError::IncompleteTemplateData {
            field: field.id.clone(),
        })
    }

    /// Well-known field ids resolvable from the request snapshots.
    fn snapshot_value(
        &self,
        field_id: &str,
        request: &AssembleRequest,
        payslip_number: &str,
    ) -> Option<FieldValue> {
        let text = |s: &str| Some(FieldValue::Text(s.to_string()));
        let number = |n: u32| Some(FieldValue::Number(Decimal::from(n)));

        match field_id {
            "employee_name" => text(&request.employee.name),
            "employee_code" => text(&request.employee.employee_code),
            "department" => text(&request.employee.department),
            "designation" => text(&request.employee.designation),
            "bank_account" => text(&request.employee.bank_account),
            "pan" => text(&request.employee.pan),
            "company_name" => text(&request.company.name),
            "company_address" => text(&request.company.address),
            "company_email" => text(&request.company.email),
            "company_phone" => text(&request.company.phone),
            "company_website" => text(&request.company.website),
            "pay_period" => text(&request.period.label()),
            "payslip_number" => text(payslip_number),
            "total_working_days" => number(request.attendance.total_working_days),
            "present_days" => number(request.attendance.present_days),
            "lop_days" => number(request.attendance.lop_days),
            "overtime_hours" => Some(FieldValue::Number(request.attendance.overtime_hours)),
            _ => None,
        }
    }
}

/// Convenience constructor used by callers that already validated their
/// attendance inputs upstream: builds an [`AssembleRequest`] against the
/// registry default template with no extra fields.
pub fn assemble_request(
    employee: EmployeeSnapshot,
    company: CompanySnapshot,
    profile: CompensationProfile,
    attendance: AttendanceRecord,
    period: PayPeriod,
) -> AssembleRequest {
    AssembleRequest {
        employee,
        company,
        profile,
        attendance,
        period,
        template_id: None,
        extra_fields: BTreeMap::new(),
    }
}
