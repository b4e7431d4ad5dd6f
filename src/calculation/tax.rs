//! Bracket tax calculation.
//!
//! The rule is a single cliff rather than a marginal schedule: the entire
//! gross is taxed at whichever rate its side of the threshold selects, so a
//! gross just above the threshold pays materially more than one exactly on it.

use rust_decimal::Decimal;

use crate::config::TaxPolicy;

/// Returns the rate that applies to the whole of `gross_salary`.
///
/// A gross equal to the threshold takes the lower rate.
pub fn bracket_rate(gross_salary: Decimal, policy: &TaxPolicy) -> Decimal {
    if gross_salary > policy.threshold {
        policy.upper_rate
    } else {
        policy.lower_rate
    }
}

/// Calculates the bracket tax owed on a gross salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_bracket_tax;
/// use payroll_engine::config::TaxPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = TaxPolicy::default();
///
/// // On the threshold: 10% of 5000
/// assert_eq!(calculate_bracket_tax(Decimal::from(5000), &policy), Decimal::from(500));
///
/// // One cent above: 15% of the whole amount
/// assert_eq!(
///     calculate_bracket_tax(Decimal::from_str("5000.01").unwrap(), &policy),
///     Decimal::from_str("750.0015").unwrap()
/// );
/// ```
pub fn calculate_bracket_tax(gross_salary: Decimal, policy: &TaxPolicy) -> Decimal {
    gross_salary * bracket_rate(gross_salary, policy)
}
