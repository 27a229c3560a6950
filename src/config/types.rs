//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed statutory rate structures that
//! are deserialized from YAML configuration files. Defaults mirror the
//! statutory norms observed in the domain but every rate is overridable,
//! either in the loaded file or per compensation profile.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Numbering convention used when spelling an amount in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberingFormat {
    /// Indian grouping: thousand, lakh, crore.
    #[default]
    Indian,
    /// Western grouping: thousand, million, billion.
    Western,
}

/// Statutory deduction rates and calculation parameters.
///
/// Each field carries a statutory default and can be overridden in the
/// configuration file or, per employee, through
/// [`StatutoryOverrides`](crate::config::StatutoryOverrides).
///
/// # Example
///
/// ```
/// use payslip_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let rates = StatutoryRates::default();
/// assert_eq!(rates.pf_cap, Decimal::from(1800));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatutoryRates {
    /// Provident Fund contribution rate applied to basic salary.
    pub pf_rate: Decimal,
    /// Monthly cap on the Provident Fund deduction.
    pub pf_cap: Decimal,
    /// Flat professional tax amount deducted above the threshold.
    pub professional_tax_amount: Decimal,
    /// Gross salary above which professional tax applies.
    pub professional_tax_threshold: Decimal,
    /// Tax-deducted-at-source rate applied to gross salary. A simplified
    /// placeholder for slab-based tax logic; real slabs are a configuration
    /// point, not hard-coded policy.
    pub tds_rate: Decimal,
    /// Gross salary above which TDS applies.
    pub tds_threshold: Decimal,
    /// Standard working hours per day, used to derive the overtime hourly
    /// rate from basic salary.
    pub standard_hours_per_day: Decimal,
    /// Numbering convention for the net-salary-in-words field.
    pub words_format: NumberingFormat,
}

impl Default for StatutoryRates {
    fn default() -> Self {
        Self {
            pf_rate: Decimal::new(12, 2),
            pf_cap: Decimal::from(1800),
            professional_tax_amount: Decimal::from(200),
            professional_tax_threshold: Decimal::from(15000),
            tds_rate: Decimal::new(10, 2),
            tds_threshold: Decimal::from(40000),
            standard_hours_per_day: Decimal::from(8),
            words_format: NumberingFormat::Indian,
        }
    }
}

impl StatutoryRates {
    /// Returns a copy of these rates with the given per-profile overrides
    /// applied. Fields left as `None` in the overrides keep their configured
    /// value.
    ///
    /// # Example
    ///
    /// ```
    /// use payslip_engine::config::{StatutoryOverrides, StatutoryRates};
    /// use rust_decimal::Decimal;
    ///
    /// let overrides = StatutoryOverrides {
    ///     pf_cap: Some(Decimal::from(2400)),
    ///     ..StatutoryOverrides::default()
    /// };
    /// let rates = StatutoryRates::default().with_overrides(&overrides);
    /// assert_eq!(rates.pf_cap, Decimal::from(2400));
    /// assert_eq!(rates.tds_threshold, Decimal::from(40000));
    /// ```
    pub fn with_overrides(&self, overrides: &StatutoryOverrides) -> Self {
        Self {
            pf_rate: overrides.pf_rate.unwrap_or(self.pf_rate),
            pf_cap: overrides.pf_cap.unwrap_or(self.pf_cap),
            professional_tax_amount: overrides
                .professional_tax_amount
                .unwrap_or(self.professional_tax_amount),
            professional_tax_threshold: overrides
                .professional_tax_threshold
                .unwrap_or(self.professional_tax_threshold),
            tds_rate: overrides.tds_rate.unwrap_or(self.tds_rate),
            tds_threshold: overrides.tds_threshold.unwrap_or(self.tds_threshold),
            standard_hours_per_day: overrides
                .standard_hours_per_day
                .unwrap_or(self.standard_hours_per_day),
            words_format: overrides.words_format.unwrap_or(self.words_format),
        }
    }
}

/// Per-profile overrides for [`StatutoryRates`].
///
/// A compensation profile may override any subset of the statutory rates;
/// unset fields fall through to the configured values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatutoryOverrides {
    /// Override for the Provident Fund rate.
    pub pf_rate: Option<Decimal>,
    /// Override for the Provident Fund cap.
    pub pf_cap: Option<Decimal>,
    /// Override for the professional tax amount.
    pub professional_tax_amount: Option<Decimal>,
    /// Override for the professional tax threshold.
    pub professional_tax_threshold: Option<Decimal>,
    /// Override for the TDS rate.
    pub tds_rate: Option<Decimal>,
    /// Override for the TDS threshold.
    pub tds_threshold: Option<Decimal>,
    /// Override for standard working hours per day.
    pub standard_hours_per_day: Option<Decimal>,
    /// Override for the amount-in-words numbering convention.
    pub words_format: Option<NumberingFormat>,
}

impl StatutoryOverrides {
    /// Returns true if no field is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
