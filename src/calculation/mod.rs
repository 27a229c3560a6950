//! Calculation logic for the payslip engine.
//!
//! This module contains all the pure calculation functions for determining
//! pay: the monetary rounding policy, loss-of-pay proration, allowance
//! expansion, overtime pay, statutory deduction computation, and the
//! [`calculate_payroll`] orchestration that ties them together.

mod allowances;
mod deductions;
mod overtime;
mod payroll;
mod proration;
mod rounding;

pub use allowances::{AllowanceLine, expand_allowances};
pub use deductions::{
    DeductionLine, PF_FIELD_ID, PROFESSIONAL_TAX_FIELD_ID, TDS_FIELD_ID, statutory_deductions,
};
pub use overtime::overtime_pay;
pub use payroll::{BASIC_SALARY_FIELD_ID, OVERTIME_FIELD_ID, calculate_payroll};
pub use proration::prorate_basic;
pub use rounding::{MONEY_SCALE, round_money};
