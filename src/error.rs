//! Error types for the payslip engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll calculation and
//! payslip assembly.

use thiserror::Error;

/// The main error type for the payslip engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Every variant
/// is recoverable and reported to the caller; none is process-fatal.
///
/// # Example
///
/// ```
/// use payslip_engine::error::EngineError;
///
/// let error = EngineError::TemplateNotFound {
///     id: "tpl_modern".to_string(),
/// };
/// assert_eq!(error.to_string(), "Template not found: tpl_modern");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A compensation profile was invalid (non-positive basic salary or a
    /// malformed allowance rule).
    #[error("Invalid compensation field '{field}': {message}")]
    InvalidCompensation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An attendance record violated its invariant (present + LOP days must
    /// equal total working days, all values non-negative).
    #[error("Invalid attendance record: {message}")]
    InvalidAttendance {
        /// A description of the violated invariant.
        message: String,
    },

    /// Computed deductions exceed earnings, which would produce a negative
    /// net salary. This is a data-entry error, not a valid business state.
    #[error("Deductions {total_deductions} exceed gross earnings {gross_salary}")]
    DeductionsExceedEarnings {
        /// The computed gross salary.
        gross_salary: String,
        /// The computed total deductions.
        total_deductions: String,
    },

    /// No template exists with the requested id.
    #[error("Template not found: {id}")]
    TemplateNotFound {
        /// The template id that was not found.
        id: String,
    },

    /// A default template was requested but none is marked default.
    #[error("No template is marked as default")]
    NoDefaultTemplate,

    /// A required (non-calculated) template field has no corresponding value.
    #[error("Missing value for required template field '{field}'")]
    IncompleteTemplateData {
        /// The id of the field that could not be resolved.
        field: String,
    },

    /// Attempted to regenerate a payslip that has already been approved or
    /// paid.
    #[error("Payslip {payslip_number} is already finalized (status: {status})")]
    PayslipAlreadyFinalized {
        /// The deterministic payslip number.
        payslip_number: String,
        /// The status that blocked regeneration ("approved" or "paid").
        status: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
