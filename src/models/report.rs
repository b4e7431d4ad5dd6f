//! Reporting output models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Organization-wide payroll statistics for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationStats {
    /// Number of registered employees, with or without payroll records.
    pub total_employees: usize,
    /// Sum of net salary over the supplied records.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_payroll: Decimal,
    /// Mean net salary per record, zero when there are no records.
    #[serde(with = "rust_decimal::serde::float")]
    pub avg_salary: Decimal,
    /// Number of records folded.
    pub processed_records: usize,
}

/// Per-department payroll statistics for the analytics view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    /// Raw department value the employees share.
    pub department: String,
    /// Employees in the department, whether or not they have been paid.
    pub employee_count: usize,
    /// Sum of each employee's latest net salary.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_salary: Decimal,
    /// `total_salary / employee_count`.
    #[serde(with = "rust_decimal::serde::float")]
    pub avg_salary: Decimal,
}

impl DepartmentSummary {
    /// An empty summary for the given department.
    pub fn new(department: impl Into<String>) -> Self {
        Self {
            department: department.into(),
            employee_count: 0,
            total_salary: Decimal::ZERO,
            avg_salary: Decimal::ZERO,
        }
    }
}
