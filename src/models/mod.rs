//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod compensation;
mod employee;
mod payroll;
mod report;

pub use compensation::{Allowances, CompensationTerms, Deductions};
pub use employee::{Employee, EmployeeStatus, NewEmployee};
pub use payroll::{
    BreakdownDetail, DeductionBreakdown, PayrollBreakdown, PayrollRecord, PayrollStatus,
};
pub use report::{DepartmentSummary, OrganizationStats};
