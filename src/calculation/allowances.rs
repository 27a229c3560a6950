//! Allowance expansion.
//!
//! Expands a profile's allowance components into concrete earnings lines.
//! Percentage-of-basic components are computed from the *prorated* basic
//! salary; flat components are added as-is unless marked prorated, in which
//! case they scale with attendance like the basic salary does.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AllowanceComponent, AllowanceRule, AttendanceRecord};

use super::rounding::round_money;

/// A single expanded earnings line.
#[derive(Debug, Clone, PartialEq)]
pub struct AllowanceLine {
    /// Stable field id for template matching.
    pub field_id: String,
    /// The rounded amount.
    pub amount: Decimal,
}

/// Expands allowance components into rounded earnings lines.
///
/// # Arguments
///
/// * `components` - The profile's allowance components
/// * `prorated_basic` - The attendance-prorated basic salary
/// * `attendance` - The validated attendance record, used to scale flat
///   components marked `prorated`
///
/// # Errors
///
/// Returns [`EngineError::InvalidCompensation`] for a malformed rule:
/// a negative flat amount or a negative percentage.
pub fn expand_allowances(
    components: &[AllowanceComponent],
    prorated_basic: Decimal,
    attendance: &AttendanceRecord,
) -> EngineResult<Vec<AllowanceLine>> {
    let present = Decimal::from(attendance.present_days);
    let total = Decimal::from(attendance.total_working_days);

    components
        .iter()
        .map(|component| {
            let amount = match component.rule {
                AllowanceRule::Flat { amount } => {
                    if amount < Decimal::ZERO {
                        return Err(EngineError::InvalidCompensation {
                            field: component.field_id.clone(),
                            message: format!("flat allowance amount {} is negative", amount),
                        });
                    }
                    if component.prorated && !attendance.is_full_attendance() {
                        amount * present / total
                    } else {
                        amount
                    }
                }
                AllowanceRule::PercentOfBasic { percent } => {
                    if percent < Decimal::ZERO {
                        return Err(EngineError::InvalidCompensation {
                            field: component.field_id.clone(),
                            message: format!("allowance percentage {} is negative", percent),
                        });
                    }
                    prorated_basic * percent
                }
            };

            Ok(AllowanceLine {
                field_id: component.field_id.clone(),
                amount: round_money(amount),
            })
        })
        .collect()
}
