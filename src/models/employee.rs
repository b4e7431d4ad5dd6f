//! Employee model and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CompensationTerms;

/// Lifecycle state of an employee record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// The employee is on the payroll.
    #[default]
    Active,
}

/// An employee registered with compensation terms.
///
/// The compensation fields sit at the top level of the JSON object
/// (`baseSalary`, `allowances`, `deductions`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Job title.
    #[serde(default)]
    pub position: String,
    /// Department name, used verbatim as the reporting group key.
    #[serde(default)]
    pub department: String,
    /// Compensation terms read by the payroll calculator.
    #[serde(flatten)]
    pub compensation: CompensationTerms,
    /// When the employee was registered.
    pub created_at: DateTime<Utc>,
    /// When the employee was last modified.
    pub updated_at: DateTime<Utc>,
    /// Lifecycle state.
    #[serde(default)]
    pub status: EmployeeStatus,
}

/// The caller-supplied part of a new employee; identity and timestamps are
/// assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    /// Display name.
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Job title.
    #[serde(default)]
    pub position: String,
    /// Department name.
    #[serde(default)]
    pub department: String,
    /// Compensation terms.
    #[serde(flatten)]
    pub compensation: CompensationTerms,
}
