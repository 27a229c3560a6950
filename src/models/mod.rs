//! Core data models for the payslip engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod compensation;
mod employee;
mod pay_period;
mod payroll_result;
mod payslip;

pub use attendance::AttendanceRecord;
pub use compensation::{
    AllowanceComponent, AllowanceRule, CompensationProfile, DeductionComponent,
};
pub use employee::{CompanySnapshot, EmployeeSnapshot};
pub use pay_period::PayPeriod;
pub use payroll_result::PayrollResult;
pub use payslip::{Payslip, PayslipStatus};
