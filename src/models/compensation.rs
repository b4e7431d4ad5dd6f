//! Compensation terms attached to an employee.
//!
//! Every amount is optional on the wire: a missing key or an explicit `null`
//! reads as zero so the calculator never has to deal with absent values.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes an optional amount, treating `null` as zero.
fn amount_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes an optional nested structure, treating `null` as its default.
fn default_if_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Recurring allowances paid on top of the base salary.
///
/// The same shape is echoed back in a payroll breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allowances {
    /// Housing allowance.
    #[serde(
        default,
        deserialize_with = "amount_or_zero",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub housing: Decimal,
    /// Transport allowance.
    #[serde(
        default,
        deserialize_with = "amount_or_zero",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub transport: Decimal,
    /// Medical allowance.
    #[serde(
        default,
        deserialize_with = "amount_or_zero",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub medical: Decimal,
}

impl Allowances {
    /// Sum of the three allowance components.
    pub fn total(&self) -> Decimal {
        self.housing + self.transport + self.medical
    }
}

/// Deductions entered manually against an employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Custom tax deduction, separate from the computed bracket tax.
    #[serde(
        default,
        deserialize_with = "amount_or_zero",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub tax: Decimal,
    /// Insurance premium.
    #[serde(
        default,
        deserialize_with = "amount_or_zero",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub insurance: Decimal,
    /// Loan repayment.
    #[serde(
        default,
        deserialize_with = "amount_or_zero",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub loan: Decimal,
}

impl Deductions {
    /// Sum of the manual deductions (custom tax, insurance, loan).
    pub fn total(&self) -> Decimal {
        self.tax + self.insurance + self.loan
    }
}

/// The compensation terms the payroll calculator reads.
///
/// # Example
///
/// ```
/// use payroll_engine::models::CompensationTerms;
/// use rust_decimal::Decimal;
///
/// let terms: CompensationTerms =
///     serde_json::from_str(r#"{"baseSalary": 1000, "allowances": {"housing": 200}}"#).unwrap();
/// assert_eq!(terms.base_salary, Decimal::from(1000));
/// assert_eq!(terms.allowances.total(), Decimal::from(200));
/// assert_eq!(terms.deductions.total(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompensationTerms {
    /// Base salary for one period.
    #[serde(
        default,
        deserialize_with = "amount_or_zero",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub base_salary: Decimal,
    /// Recurring allowances.
    #[serde(default, deserialize_with = "default_if_null")]
    pub allowances: Allowances,
    /// Manual deductions.
    #[serde(default, deserialize_with = "default_if_null")]
    pub deductions: Deductions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_object_defaults_to_zero() {
        let terms: CompensationTerms = serde_json::from_str("{}").unwrap();
        assert_eq!(terms, CompensationTerms::default());
        assert_eq!(terms.base_salary, Decimal::ZERO);
    }

    #[test]
    fn test_null_fields_default_to_zero() {
        let json = r#"{
            "baseSalary": null,
            "allowances": {"housing": null, "transport": 150},
            "deductions": null
        }"#;

        let terms: CompensationTerms = serde_json::from_str(json).unwrap();
        assert_eq!(terms.base_salary, Decimal::ZERO);
        assert_eq!(terms.allowances.housing, Decimal::ZERO);
        assert_eq!(terms.allowances.transport, dec("150"));
        assert_eq!(terms.deductions, Deductions::default());
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        let json = r#"{
            "baseSalary": 5000.01,
            "deductions": {"tax": "25.50", "insurance": 100, "loan": 0}
        }"#;

        let terms: CompensationTerms = serde_json::from_str(json).unwrap();
        assert_eq!(terms.base_salary, dec("5000.01"));
        assert_eq!(terms.deductions.tax, dec("25.50"));
        assert_eq!(terms.deductions.total(), dec("125.50"));
    }

    #[test]
    fn test_allowance_total() {
        let allowances = Allowances {
            housing: dec("1000"),
            transport: dec("300"),
            medical: dec("200"),
        };
        assert_eq!(allowances.total(), dec("1500"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let terms = CompensationTerms {
            base_salary: dec("4000"),
            ..Default::default()
        };
        let json = serde_json::to_value(&terms).unwrap();
        assert!(json.get("baseSalary").is_some());
        assert!(json.get("base_salary").is_none());
    }
}
