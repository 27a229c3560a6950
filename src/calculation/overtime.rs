//! Overtime pay calculation.
//!
//! Overtime is paid at the derived hourly rate:
//! `basic_salary / (total_working_days * standard_hours_per_day)`. The
//! standard hours per day are configuration (default 8), not hard-coded.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::models::AttendanceRecord;

use super::rounding::round_money;

/// Calculates overtime pay for the period, rounded to 2 decimal places.
///
/// The hourly rate derives from the contracted basic salary, and the final
/// amount is rounded once so the earnings line reconciles with the gross it
/// contributes to. Zero overtime hours yield zero.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::overtime_pay;
/// use payslip_engine::config::StatutoryRates;
/// use payslip_engine::models::AttendanceRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let attendance = AttendanceRecord {
///     total_working_days: 22,
///     present_days: 22,
///     lop_days: 0,
///     overtime_hours: Decimal::from_str("10").unwrap(),
/// };
/// // 35200 / (22 * 8) = 200 per hour
/// let pay = overtime_pay(
///     Decimal::from(35200),
///     &attendance,
///     &StatutoryRates::default(),
/// );
/// assert_eq!(pay, Decimal::from_str("2000.00").unwrap());
/// ```
pub fn overtime_pay(
    basic_salary: Decimal,
    attendance: &AttendanceRecord,
    rates: &StatutoryRates,
) -> Decimal {
    if attendance.overtime_hours.is_zero() {
        return Decimal::ZERO;
    }

    let period_hours = Decimal::from(attendance.total_working_days) * rates.standard_hours_per_day;
    let hourly_rate = basic_salary / period_hours;
    round_money(attendance.overtime_hours * hourly_rate)
}
