//! Payroll breakdown calculation.
//!
//! Turns an employee's compensation terms into a [`PayrollBreakdown`] for one
//! period. The calculation is total: absent amounts are already zero by the
//! time they reach here, and negative results are reported, not rejected.

use tracing::debug;

use crate::config::TaxPolicy;
use crate::models::{BreakdownDetail, CompensationTerms, DeductionBreakdown, PayrollBreakdown};

use super::tax::calculate_bracket_tax;

/// Calculates the payroll breakdown for one employee and one period.
///
/// # Arguments
///
/// * `terms` - The employee's compensation terms
/// * `policy` - The bracket tax rule
/// * `working_days` - Working days in the period. Accepted for forward
///   compatibility; it does not affect the result.
///
/// # Steps
///
/// 1. `total_allowances = housing + transport + medical`
/// 2. `gross_salary = base_salary + total_allowances`
/// 3. `tax_amount` = bracket tax on the whole gross
/// 4. `total_deductions = tax_amount + custom tax + insurance + loan`
/// 5. `net_salary = gross_salary - total_deductions` (may be negative)
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_payroll, DEFAULT_WORKING_DAYS};
/// use payroll_engine::config::TaxPolicy;
/// use payroll_engine::models::CompensationTerms;
/// use rust_decimal::Decimal;
///
/// let terms: CompensationTerms =
///     serde_json::from_str(r#"{"baseSalary": 1000, "allowances": {"housing": 200}}"#).unwrap();
///
/// let payroll = calculate_payroll(&terms, &TaxPolicy::default(), DEFAULT_WORKING_DAYS);
///
/// assert_eq!(payroll.total_allowances, Decimal::from(200));
/// assert_eq!(payroll.gross_salary, Decimal::from(1200));
/// assert_eq!(payroll.tax_amount, Decimal::from(120));
/// assert_eq!(payroll.net_salary, Decimal::from(1080));
/// ```
pub fn calculate_payroll(
    terms: &CompensationTerms,
    policy: &TaxPolicy,
    working_days: u32,
) -> PayrollBreakdown {
    let allowances = &terms.allowances;
    let deductions = &terms.deductions;

    let total_allowances = allowances.total();
    let gross_salary = terms.base_salary + total_allowances;
    let tax_amount = calculate_bracket_tax(gross_salary, policy);
    let total_deductions = tax_amount + deductions.total();
    let net_salary = gross_salary - total_deductions;

    debug!(
        working_days,
        gross_salary = %gross_salary,
        tax_amount = %tax_amount,
        net_salary = %net_salary,
        "Calculated payroll breakdown"
    );

    PayrollBreakdown {
        base_salary: terms.base_salary,
        total_allowances,
        gross_salary,
        tax_amount,
        total_deductions,
        net_salary,
        breakdown: BreakdownDetail {
            allowances: allowances.clone(),
            deductions: DeductionBreakdown {
                tax: tax_amount,
                insurance: deductions.insurance,
                loan: deductions.loan,
                custom_tax: deductions.tax,
            },
        },
    }
}
