//! Payroll calculation orchestration.
//!
//! [`calculate_payroll`] is the pure, deterministic transformation from
//! (compensation profile, attendance record, statutory rates) to a
//! [`PayrollResult`]. No I/O, no side effects; safe to invoke concurrently
//! for distinct employee/period pairs.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::config::StatutoryRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, CompensationProfile, PayrollResult};

use super::allowances::expand_allowances;
use super::deductions::statutory_deductions;
use super::overtime::overtime_pay;
use super::proration::prorate_basic;
use super::rounding::round_money;

/// Field id of the basic salary earnings line.
pub const BASIC_SALARY_FIELD_ID: &str = "basic_salary";
/// Field id of the overtime earnings line.
pub const OVERTIME_FIELD_ID: &str = "overtime";

/// Calculates the full earnings/deductions breakdown for one employee and
/// period.
///
/// Calculation order (reproducibility depends on it):
/// 1. Prorate the basic salary by attendance.
/// 2. Expand allowance components (percentages from the prorated basic).
/// 3. Add overtime pay at the derived hourly rate.
/// 4. Gross salary = sum of the rounded earnings lines.
/// 5. Compute statutory and flat deductions.
/// 6. Net salary = gross - total deductions.
///
/// Each line is rounded to 2 decimal places before summation, so every
/// displayed line item reconciles exactly with the totals it contributes to.
///
/// # Errors
///
/// - [`EngineError::InvalidCompensation`] for a non-positive basic salary,
///   malformed allowance/deduction rule, or duplicate field id
/// - [`EngineError::InvalidAttendance`] when the attendance invariant fails
/// - [`EngineError::DeductionsExceedEarnings`] when deductions would push
///   the net salary below zero
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::calculate_payroll;
/// use payslip_engine::config::StatutoryRates;
/// use payslip_engine::models::{AttendanceRecord, CompensationProfile};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let profile = CompensationProfile {
///     employee_id: "emp_001".to_string(),
///     version: 1,
///     effective_from: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
///     basic_salary: Decimal::from(50000),
///     allowances: vec![],
///     flat_deductions: vec![],
///     overrides: Default::default(),
/// };
/// let attendance = AttendanceRecord {
///     total_working_days: 22,
///     present_days: 22,
///     lop_days: 0,
///     overtime_hours: Decimal::ZERO,
/// };
///
/// let result = calculate_payroll(&profile, &attendance, &StatutoryRates::default()).unwrap();
/// assert_eq!(result.gross_salary, Decimal::from(50000));
/// assert_eq!(
///     result.net_salary,
///     result.gross_salary - result.total_deductions
/// );
/// ```
pub fn calculate_payroll(
    profile: &CompensationProfile,
    attendance: &AttendanceRecord,
    rates: &StatutoryRates,
) -> EngineResult<PayrollResult> {
    if profile.basic_salary <= Decimal::ZERO {
        return Err(EngineError::InvalidCompensation {
            field: BASIC_SALARY_FIELD_ID.to_string(),
            message: format!(
                "basic salary {} must be greater than zero",
                profile.basic_salary
            ),
        });
    }
    attendance.validate()?;

    let rates = rates.with_overrides(&profile.overrides);

    fn insert_earning(
        earnings: &mut BTreeMap<String, Decimal>,
        field_id: &str,
        amount: Decimal,
    ) -> EngineResult<()> {
        if earnings.insert(field_id.to_string(), amount).is_some() {
            return Err(EngineError::InvalidCompensation {
                field: field_id.to_string(),
                message: "duplicate earnings field id".to_string(),
            });
        }
        Ok(())
    }

    let mut earnings = BTreeMap::new();
    let prorated_basic = prorate_basic(profile.basic_salary, attendance);
    insert_earning(&mut earnings, BASIC_SALARY_FIELD_ID, prorated_basic)?;

    for line in expand_allowances(&profile.allowances, prorated_basic, attendance)? {
        insert_earning(&mut earnings, &line.field_id, line.amount)?;
    }

    let overtime = overtime_pay(profile.basic_salary, attendance, &rates);
    if !overtime.is_zero() {
        insert_earning(&mut earnings, OVERTIME_FIELD_ID, overtime)?;
    }

    let gross_salary = round_money(earnings.values().copied().sum());

    let mut deductions = BTreeMap::new();
    for line in statutory_deductions(
        profile.basic_salary,
        gross_salary,
        &profile.flat_deductions,
        &rates,
    )? {
        if deductions.insert(line.field_id.clone(), line.amount).is_some() {
            return Err(EngineError::InvalidCompensation {
                field: line.field_id,
                message: "duplicate deductions field id".to_string(),
            });
        }
    }

    let total_deductions = round_money(deductions.values().copied().sum());
    let net_salary = gross_salary - total_deductions;

    if net_salary < Decimal::ZERO {
        return Err(EngineError::DeductionsExceedEarnings {
            gross_salary: gross_salary.to_string(),
            total_deductions: total_deductions.to_string(),
        });
    }

    Ok(PayrollResult {
        earnings,
        deductions,
        gross_salary,
        total_deductions,
        net_salary,
    })
}
