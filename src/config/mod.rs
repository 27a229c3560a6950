//! Configuration loading and management for the payslip engine.
//!
//! This module provides the statutory rate configuration (Provident Fund,
//! professional tax, TDS, standard hours) and a YAML loader for it.
//! Allowance and overtime rates are configuration, not hard-coded; the
//! defaults mirror statutory norms and every value is overridable per
//! compensation profile.
//!
//! # Example
//!
//! ```no_run
//! use payslip_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/statutory.yaml").unwrap();
//! println!("PF rate: {}", loader.rates().pf_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{NumberingFormat, StatutoryOverrides, StatutoryRates};
