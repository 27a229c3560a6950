//! Payroll calculation result model.
//!
//! The [`PayrollResult`] captures all numeric outputs of a payroll
//! calculation: the individual earnings and deductions lines keyed by their
//! stable field ids, and the reconciled gross/total/net amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The complete numeric result of a payroll calculation.
///
/// Earnings and deductions are keyed by stable field ids (`basic_salary`,
/// `hra`, `provident_fund`, ...) so they can be matched against a template
/// schema's field lists. `BTreeMap` keeps iteration and serialization order
/// deterministic, which the idempotent-regeneration guarantee relies on.
///
/// Amounts are never negative; `net_salary` may be zero but not negative.
///
/// # Example
///
/// ```
/// use payslip_engine::models::PayrollResult;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let mut earnings = BTreeMap::new();
/// earnings.insert("basic_salary".to_string(), Decimal::from(50000));
///
/// let result = PayrollResult {
///     earnings,
///     deductions: BTreeMap::new(),
///     gross_salary: Decimal::from(50000),
///     total_deductions: Decimal::ZERO,
///     net_salary: Decimal::from(50000),
/// };
/// assert_eq!(result.net_salary, result.gross_salary - result.total_deductions);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Earnings lines keyed by field id.
    pub earnings: BTreeMap<String, Decimal>,
    /// Deductions lines keyed by field id.
    pub deductions: BTreeMap<String, Decimal>,
    /// Sum of all earnings lines.
    pub gross_salary: Decimal,
    /// Sum of all deductions lines.
    pub total_deductions: Decimal,
    /// `gross_salary - total_deductions`; the amount actually paid.
    pub net_salary: Decimal,
}

impl PayrollResult {
    /// Looks up an earnings line by field id.
    pub fn earning(&self, field_id: &str) -> Option<Decimal> {
        self.earnings.get(field_id).copied()
    }

    /// Looks up a deductions line by field id.
    pub fn deduction(&self, field_id: &str) -> Option<Decimal> {
        self.deductions.get(field_id).copied()
    }
}
