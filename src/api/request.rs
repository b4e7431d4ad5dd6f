//! Request types for the payroll API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::NewEmployee;

/// Largest magnitude accepted for any single compensation amount.
///
/// Keeps every sum the engine and the reports compute well inside
/// `Decimal`'s range.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

/// Request body for `POST /employees`.
pub type CreateEmployeeRequest = NewEmployee;

/// Request body for `POST /payroll/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatePayrollRequest {
    /// The employee to pay.
    pub employee_id: String,
    /// Period label, e.g. `2024-01`.
    pub period: String,
    /// Working days in the period; the configured default when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_days: Option<u32>,
}

impl CalculatePayrollRequest {
    /// Rejects blank identifiers.
    pub fn validate(&self) -> EngineResult<()> {
        require_non_blank("employeeId", &self.employee_id)?;
        require_non_blank("period", &self.period)
    }
}

/// Query string for `GET /payroll` and `GET /dashboard/stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodQuery {
    /// Restrict to one period.
    pub period: Option<String>,
}

/// Rejects a blank employee name and out-of-range compensation amounts.
pub fn validate_new_employee(request: &CreateEmployeeRequest) -> EngineResult<()> {
    require_non_blank("name", &request.name)?;

    let terms = &request.compensation;
    let amounts = [
        ("baseSalary", terms.base_salary),
        ("allowances.housing", terms.allowances.housing),
        ("allowances.transport", terms.allowances.transport),
        ("allowances.medical", terms.allowances.medical),
        ("deductions.tax", terms.deductions.tax),
        ("deductions.insurance", terms.deductions.insurance),
        ("deductions.loan", terms.deductions.loan),
    ];
    for (field, amount) in amounts {
        require_in_range(field, amount)?;
    }
    Ok(())
}

fn require_in_range(field: &str, amount: Decimal) -> EngineResult<()> {
    if amount.abs() > Decimal::from(MAX_AMOUNT) {
        return Err(EngineError::InvalidRequest {
            field: field.to_string(),
            message: format!("magnitude must not exceed {}", MAX_AMOUNT),
        });
    }
    Ok(())
}

fn require_non_blank(field: &str, value: &str) -> EngineResult<()> {
    if value.trim().is_empty() {
        return Err(EngineError::InvalidRequest {
            field: field.to_string(),
            message: "must not be blank".to_string(),
        });
    }
    Ok(())
}
