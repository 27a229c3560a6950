//! Statutory and flat deduction calculation.
//!
//! Computes Provident Fund, professional tax and TDS from the configured
//! statutory rates, then appends the profile's flat deduction components
//! (ESI, loan repayments, advances) as-is. Every rate and threshold is
//! independently overridable; the defaults reflect typical slabs.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::error::{EngineError, EngineResult};
use crate::models::DeductionComponent;

use super::rounding::round_money;

/// Field id of the Provident Fund deduction line.
pub const PF_FIELD_ID: &str = "provident_fund";
/// Field id of the professional tax deduction line.
pub const PROFESSIONAL_TAX_FIELD_ID: &str = "professional_tax";
/// Field id of the TDS deduction line.
pub const TDS_FIELD_ID: &str = "tds";

/// A single expanded deductions line.
#[derive(Debug, Clone, PartialEq)]
pub struct DeductionLine {
    /// Stable field id for template matching.
    pub field_id: String,
    /// The rounded amount.
    pub amount: Decimal,
}

/// Computes all deduction lines for a pay period.
///
/// Statutory formulas:
/// - Provident Fund: `min(basic_salary * pf_rate, pf_cap)`, computed from
///   the contracted (unprorated) basic salary; the cap tracks the
///   employment contract, not the month's attendance.
/// - Professional tax: flat `professional_tax_amount` when gross salary
///   exceeds the threshold.
/// - TDS: `gross_salary * tds_rate` when gross salary exceeds the
///   threshold. A simplified placeholder; real slab logic belongs in
///   configuration.
///
/// Statutory lines that compute to zero are omitted rather than emitted as
/// 0-amount lines. Flat components are summed as-is.
///
/// # Errors
///
/// Returns [`EngineError::InvalidCompensation`] for a negative flat
/// deduction component.
pub fn statutory_deductions(
    basic_salary: Decimal,
    gross_salary: Decimal,
    flat_components: &[DeductionComponent],
    rates: &StatutoryRates,
) -> EngineResult<Vec<DeductionLine>> {
    let mut lines = Vec::new();

    let pf = round_money((basic_salary * rates.pf_rate).min(rates.pf_cap));
    if !pf.is_zero() {
        lines.push(DeductionLine {
            field_id: PF_FIELD_ID.to_string(),
            amount: pf,
        });
    }

    if gross_salary > rates.professional_tax_threshold {
        lines.push(DeductionLine {
            field_id: PROFESSIONAL_TAX_FIELD_ID.to_string(),
            amount: round_money(rates.professional_tax_amount),
        });
    }

    if gross_salary > rates.tds_threshold {
        lines.push(DeductionLine {
            field_id: TDS_FIELD_ID.to_string(),
            amount: round_money(gross_salary * rates.tds_rate),
        });
    }

    for component in flat_components {
        if component.amount < Decimal::ZERO {
            return Err(EngineError::InvalidCompensation {
                field: component.field_id.clone(),
                message: format!("flat deduction amount {} is negative", component.amount),
            });
        }
        lines.push(DeductionLine {
            field_id: component.field_id.clone(),
            amount: round_money(component.amount),
        });
    }

    Ok(lines)
}
