//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type that defines the calculation
//! context for a payroll run: which month is being paid and the exact date
//! bounds of the period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A month-aligned pay period with explicit date bounds.
///
/// # Example
///
/// ```
/// use payslip_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     month: 1,
///     year: 2026,
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// };
/// assert_eq!(period.label(), "January 2026");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Calendar month being paid (1-12).
    pub month: u32,
    /// Calendar year being paid.
    pub year: i32,
    /// The first day of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Builds a period covering the given calendar month.
    ///
    /// Returns `None` for an invalid month/year combination.
    ///
    /// # Example
    ///
    /// ```
    /// use payslip_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod::for_month(2026, 2).unwrap();
    /// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
    /// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
    /// ```
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        let start_date = NaiveDate::from_ymd_opt(year, month, 1)?;
        let first_of_next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let end_date = first_of_next.pred_opt()?;

        Some(Self {
            month,
            year,
            start_date,
            end_date,
        })
    }

    /// Human-readable period label for payslip rendering, e.g. "January 2026".
    pub fn label(&self) -> String {
        self.start_date.format("%B %Y").to_string()
    }
}
