//! Payroll result models.
//!
//! [`PayrollBreakdown`] is the value produced by the calculator;
//! [`PayrollRecord`] is that breakdown stamped with identity and persisted.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Allowances;

/// Deduction-facing values echoed in a breakdown.
///
/// `tax` is the computed bracket tax; `custom_tax` is the manually entered tax
/// deduction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionBreakdown {
    /// Computed bracket tax.
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    /// Insurance deduction.
    #[serde(with = "rust_decimal::serde::float")]
    pub insurance: Decimal,
    /// Loan deduction.
    #[serde(with = "rust_decimal::serde::float")]
    pub loan: Decimal,
    /// Manually entered tax deduction.
    #[serde(with = "rust_decimal::serde::float")]
    pub custom_tax: Decimal,
}

/// Itemised echo of the inputs behind a breakdown, kept for display and audit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownDetail {
    /// Allowance components.
    pub allowances: Allowances,
    /// Deduction components.
    pub deductions: DeductionBreakdown,
}

/// Full payroll breakdown for one employee and one period.
///
/// `gross_salary == base_salary + total_allowances` and
/// `net_salary == gross_salary - total_deductions` hold for every value
/// produced by the calculator. `net_salary` may be negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollBreakdown {
    /// Base salary as supplied.
    #[serde(with = "rust_decimal::serde::float")]
    pub base_salary: Decimal,
    /// Sum of all allowances.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_allowances: Decimal,
    /// Base salary plus allowances.
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_salary: Decimal,
    /// Computed bracket tax.
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_amount: Decimal,
    /// Bracket tax plus manual deductions.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_deductions: Decimal,
    /// Gross minus total deductions.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_salary: Decimal,
    /// Itemised inputs.
    pub breakdown: BreakdownDetail,
}

/// Status of a persisted payroll record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Computed and stored.
    #[default]
    Calculated,
}

/// A persisted payroll result. At most one exists per `(employee_id, period)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    /// Generated identifier.
    pub id: String,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// Snapshot of the employee name at calculation time.
    pub employee_name: String,
    /// Period label, e.g. `2024-01`.
    pub period: String,
    /// The computed breakdown.
    #[serde(flatten)]
    pub payroll: PayrollBreakdown,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// Record status.
    #[serde(default)]
    pub status: PayrollStatus,
}

impl PayrollRecord {
    /// Net salary of this record.
    pub fn net_salary(&self) -> Decimal {
        self.payroll.net_salary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_serializes_flat_camel_case() {
        let record = PayrollRecord {
            id: "rec_001".to_string(),
            employee_id: "emp_001".to_string(),
            employee_name: "Ada".to_string(),
            period: "2024-01".to_string(),
            payroll: PayrollBreakdown {
                base_salary: Decimal::from(1000),
                gross_salary: Decimal::from(1000),
                net_salary: Decimal::from(900),
                ..Default::default()
            },
            created_at: Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap(),
            status: PayrollStatus::Calculated,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["employeeId"], "emp_001");
        assert_eq!(json["status"], "calculated");
        assert!(json["netSalary"].is_number());
        assert_eq!(json["netSalary"].as_f64(), Some(900.0));
        assert!(json["breakdown"]["deductions"]["tax"].is_number());
        assert!(json.get("payroll").is_none());
        assert!(json["breakdown"]["deductions"].get("customTax").is_some());
    }

    #[test]
    fn test_net_salary_accessor() {
        let record = PayrollRecord {
            id: "rec_002".to_string(),
            employee_id: "emp_002".to_string(),
            employee_name: "Grace".to_string(),
            period: "2024-02".to_string(),
            payroll: PayrollBreakdown {
                net_salary: Decimal::from(-50),
                ..Default::default()
            },
            created_at: Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap(),
            status: PayrollStatus::Calculated,
        };
        assert_eq!(record.net_salary(), Decimal::from(-50));
    }
}
