//! Payslip record model.
//!
//! A [`Payslip`] is the finalized output of the assembler: calculator
//! results merged with a frozen template snapshot and the employee/company
//! snapshots. Its numeric fields are frozen at generation time; status
//! transitions are driven by an external workflow and never re-invoke the
//! calculator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::template::{FieldValue, TemplateSchema};

use super::employee::{CompanySnapshot, EmployeeSnapshot};
use super::pay_period::PayPeriod;
use super::payroll_result::PayrollResult;

/// Lifecycle status of a payslip.
///
/// `generated --(external approval)--> approved --(external payment)--> paid`.
/// No transition moves backward, and both forward transitions leave the
/// numeric payload untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayslipStatus {
    /// Created by the assembler; may still be regenerated.
    Generated,
    /// Approved by the external workflow; immutable.
    Approved,
    /// Paid out; immutable.
    Paid,
}

impl PayslipStatus {
    /// The status name as used in error messages and serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayslipStatus::Generated => "generated",
            PayslipStatus::Approved => "approved",
            PayslipStatus::Paid => "paid",
        }
    }
}

/// An immutable, finalized payslip record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique record id. Stable across regenerations of the same draft.
    pub id: Uuid,
    /// Deterministic payslip number: `PS-{year}-{month:02}-{employee_id}`.
    pub payslip_number: String,
    /// Snapshot of the employee at generation time.
    pub employee: EmployeeSnapshot,
    /// Snapshot of the issuing company at generation time.
    pub company: CompanySnapshot,
    /// Frozen copy of the resolved template (fields and styling). Later
    /// template edits cannot retroactively alter this payslip.
    pub template: TemplateSchema,
    /// The pay period this payslip covers.
    pub period: PayPeriod,
    /// The calculator's numeric result.
    pub result: PayrollResult,
    /// Resolved values for every template field, calculated fields included.
    pub fields: BTreeMap<String, FieldValue>,
    /// The net salary spelled out in words.
    pub net_salary_in_words: String,
    /// Lifecycle status.
    pub status: PayslipStatus,
    /// When this payslip was generated.
    pub generated_at: DateTime<Utc>,
}

impl Payslip {
    /// Builds the deterministic payslip number for an employee and period.
    ///
    /// # Example
    ///
    /// ```
    /// use payslip_engine::models::Payslip;
    ///
    /// assert_eq!(Payslip::number_for(2026, 1, "emp_001"), "PS-2026-01-emp_001");
    /// ```
    pub fn number_for(year: i32, month: u32, employee_id: &str) -> String {
        format!("PS-{}-{:02}-{}", year, month, employee_id)
    }

    /// Marks the payslip approved. Only legal from `Generated`; returns
    /// whether the transition applied. The numeric payload is untouched
    /// either way.
    pub fn approve(&mut self) -> bool {
        if self.status == PayslipStatus::Generated {
            self.status = PayslipStatus::Approved;
            true
        } else {
            false
        }
    }

    /// Marks the payslip paid. Only legal from `Approved`; returns whether
    /// the transition applied.
    pub fn mark_paid(&mut self) -> bool {
        if self.status == PayslipStatus::Approved {
            self.status = PayslipStatus::Paid;
            true
        } else {
            false
        }
    }

    /// Returns true once the payslip has left the `Generated` state and may
    /// no longer be regenerated.
    pub fn is_finalized(&self) -> bool {
        self.status != PayslipStatus::Generated
    }
}
