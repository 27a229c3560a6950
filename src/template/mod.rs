//! Payslip template schemas and the template registry.
//!
//! A template defines the field layout and presentation of a payslip; the
//! registry is the lookup service the assembler resolves templates through.
//! Templates referenced by an issued payslip are frozen into that payslip as
//! an owned copy, so registry edits never rewrite history.

mod registry;
mod schema;

pub use registry::{InMemoryRegistry, TemplateRegistry, get_default, get_schema};
pub use schema::{FieldType, FieldValue, TemplateField, TemplateSchema, TemplateStyling};
