//! Basic salary proration.
//!
//! When an employee has loss-of-pay days, every basic-salary-derived
//! earnings component is scaled by `present_days / total_working_days`
//! before allowance computation. Full attendance makes proration a no-op.

use rust_decimal::Decimal;

use crate::models::AttendanceRecord;

use super::rounding::round_money;

/// Prorates the basic salary by attendance, rounded to 2 decimal places.
///
/// Callers must have validated `attendance` first; a zero
/// `total_working_days` would otherwise divide by zero.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::prorate_basic;
/// use payslip_engine::models::AttendanceRecord;
/// use rust_decimal::Decimal;
///
/// let attendance = AttendanceRecord {
///     total_working_days: 22,
///     present_days: 11,
///     lop_days: 11,
///     overtime_hours: Decimal::ZERO,
/// };
/// let prorated = prorate_basic(Decimal::from(50000), &attendance);
/// assert_eq!(prorated, Decimal::from(25000));
/// ```
pub fn prorate_basic(basic_salary: Decimal, attendance: &AttendanceRecord) -> Decimal {
    if attendance.is_full_attendance() {
        return round_money(basic_salary);
    }

    let present = Decimal::from(attendance.present_days);
    let total = Decimal::from(attendance.total_working_days);
    round_money(basic_salary * present / total)
}
