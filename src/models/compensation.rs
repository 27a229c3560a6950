//! Compensation profile models.
//!
//! A [`CompensationProfile`] describes an employee's contracted pay
//! structure: basic salary, allowance components, flat deduction components,
//! and any per-employee statutory overrides. Profiles are immutable per
//! effective date; a change in compensation is represented by a new profile
//! value with a bumped version, never by mutating an existing one in place.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::StatutoryOverrides;

/// How an allowance component's amount is derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum AllowanceRule {
    /// A fixed monthly amount (e.g., conveyance, medical).
    Flat {
        /// The flat monthly amount.
        amount: Decimal,
    },
    /// A percentage of the (prorated) basic salary (e.g., HRA at 40%).
    PercentOfBasic {
        /// The percentage expressed as a fraction (0.40 for 40%).
        percent: Decimal,
    },
}

/// A named earnings component attached to a compensation profile.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{AllowanceComponent, AllowanceRule};
/// use rust_decimal::Decimal;
///
/// let hra = AllowanceComponent {
///     field_id: "hra".to_string(),
///     label: "House Rent Allowance".to_string(),
///     rule: AllowanceRule::PercentOfBasic {
///         percent: Decimal::new(40, 2),
///     },
///     prorated: true,
/// };
/// assert!(hra.prorated);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowanceComponent {
    /// Stable field id, matching the template schema's earnings field ids.
    pub field_id: String,
    /// Human-readable label for payslip rendering.
    pub label: String,
    /// How the amount is derived.
    #[serde(flatten)]
    pub rule: AllowanceRule,
    /// Whether a flat amount is scaled by attendance. Percentage rules are
    /// always computed from the prorated basic and ignore this flag.
    #[serde(default)]
    pub prorated: bool,
}

/// A flat, config-supplied deduction component (ESI, loan repayment,
/// salary advance). Summed into deductions as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionComponent {
    /// Stable field id, matching the template schema's deductions field ids.
    pub field_id: String,
    /// Human-readable label for payslip rendering.
    pub label: String,
    /// The flat monthly amount to deduct.
    pub amount: Decimal,
}

/// An employee's contracted compensation for a given effective date.
///
/// Immutable once created: a compensation change produces a new profile
/// value with `version + 1` and a later `effective_from`. There is no
/// mutating API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationProfile {
    /// The employee this profile belongs to.
    pub employee_id: String,
    /// Monotonically increasing profile version.
    pub version: u32,
    /// The date from which this profile applies.
    pub effective_from: NaiveDate,
    /// Monthly basic salary. Must be positive.
    pub basic_salary: Decimal,
    /// Allowance components expanded into earnings lines.
    #[serde(default)]
    pub allowances: Vec<AllowanceComponent>,
    /// Flat deduction components (ESI, loans, advances).
    #[serde(default)]
    pub flat_deductions: Vec<DeductionComponent>,
    /// Per-employee statutory rate overrides.
    #[serde(default)]
    pub overrides: StatutoryOverrides,
}

impl CompensationProfile {
    /// Returns a successor profile with the given basic salary, effective
    /// from `effective_from`, leaving `self` untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use payslip_engine::models::CompensationProfile;
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
    ///
    /// let revised = profile.revise(
    ///     Decimal::from(55000),
    ///     NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
    /// );
    /// assert_eq!(revised.version, 2);
    /// assert_eq!(profile.version, 1);
    /// ```
    pub fn revise(&self, basic_salary: Decimal, effective_from: NaiveDate) -> Self {
        Self {
            version: self.version + 1,
            effective_from,
            basic_salary,
            ..self.clone()
        }
    }
}
