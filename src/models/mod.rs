//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod payroll_report;
mod reporting_period;
mod sales;

pub use employee::{Employee, EmployeeCategory};
pub use payroll_report::{
    AuditStep, AuditTrace, AuditWarning, EmployeePay, NO_WINNER, PayrollReport,
};
pub use reporting_period::ReportingPeriod;
pub use sales::SalesByName;
