//! Attendance record model.
//!
//! An [`AttendanceRecord`] summarizes one employee's attendance for one pay
//! period. The record owns its invariant: present days plus loss-of-pay days
//! must account for every working day in the period (unpaid leave is already
//! excluded upstream by the attendance source).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Per-employee attendance totals for a pay period.
///
/// # Example
///
/// ```
/// use payslip_engine::models::AttendanceRecord;
/// use rust_decimal::Decimal;
///
/// let attendance = AttendanceRecord {
///     total_working_days: 22,
///     present_days: 20,
///     lop_days: 2,
///     overtime_hours: Decimal::ZERO,
/// };
/// assert!(attendance.validate().is_ok());
/// assert!(!attendance.is_full_attendance());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Total working days in the pay period.
    pub total_working_days: u32,
    /// Days the employee was present (or on paid leave).
    pub present_days: u32,
    /// Loss-of-pay days: unpaid absences reducing prorated earnings.
    pub lop_days: u32,
    /// Overtime hours worked in the period.
    pub overtime_hours: Decimal,
}

impl AttendanceRecord {
    /// Checks the attendance invariant and rejects malformed records before
    /// any calculation runs.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAttendance`] when:
    /// - `total_working_days` is zero
    /// - `present_days + lop_days != total_working_days`
    /// - `overtime_hours` is negative
    pub fn validate(&self) -> EngineResult<()> {
        if self.total_working_days == 0 {
            return Err(EngineError::InvalidAttendance {
                message: "total working days must be greater than zero".to_string(),
            });
        }

        if self.present_days + self.lop_days != self.total_working_days {
            return Err(EngineError::InvalidAttendance {
                message: format!(
                    "present days ({}) + LOP days ({}) != total working days ({})",
                    self.present_days, self.lop_days, self.total_working_days
                ),
            });
        }

        if self.overtime_hours < Decimal::ZERO {
            return Err(EngineError::InvalidAttendance {
                message: format!("overtime hours ({}) must not be negative", self.overtime_hours),
            });
        }

        Ok(())
    }

    /// Returns true when the employee was present for every working day.
    pub fn is_full_attendance(&self) -> bool {
        self.present_days == self.total_working_days
    }
}
