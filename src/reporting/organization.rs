//! Organization-wide payroll statistics.

use rust_decimal::Decimal;

use crate::models::{OrganizationStats, PayrollRecord};

/// Folds payroll records into dashboard statistics.
///
/// `employee_count` is supplied separately because employees without any
/// payroll record still count toward the total. The average is taken per
/// record, and is zero when there are none.
///
/// # Examples
///
/// ```
/// use payroll_engine::reporting::summarize;
/// use rust_decimal::Decimal;
///
/// let stats = summarize(5, &[]);
/// assert_eq!(stats.total_employees, 5);
/// assert_eq!(stats.total_payroll, Decimal::ZERO);
/// assert_eq!(stats.avg_salary, Decimal::ZERO);
/// assert_eq!(stats.processed_records, 0);
/// ```
pub fn summarize(employee_count: usize, records: &[PayrollRecord]) -> OrganizationStats {
    // Records built outside the API carry no amount bound.
    let total_payroll = records
        .iter()
        .map(PayrollRecord::net_salary)
        .fold(Decimal::ZERO, Decimal::saturating_add);
    let avg_salary = if records.is_empty() {
        Decimal::ZERO
    } else {
        total_payroll / Decimal::from(records.len())
    };

    OrganizationStats {
        total_employees: employee_count,
        total_payroll,
        avg_salary,
        processed_records: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PayrollBreakdown, PayrollStatus};
    use chrono::{TimeZone, Utc};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(employee_id: &str, period: &str, net: &str) -> PayrollRecord {
        PayrollRecord {
            id: format!("{}_{}", employee_id, period),
            employee_id: employee_id.to_string(),
            employee_name: employee_id.to_string(),
            period: period.to_string(),
            payroll: PayrollBreakdown {
                net_salary: dec(net),
                ..Default::default()
            },
            created_at: Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap(),
            status: PayrollStatus::Calculated,
        }
    }

    #[test]
    fn test_no_records() {
        let stats = summarize(5, &[]);
        assert_eq!(
            stats,
            OrganizationStats {
                total_employees: 5,
                total_payroll: Decimal::ZERO,
                avg_salary: Decimal::ZERO,
                processed_records: 0,
            }
        );
    }

    #[test]
    fn test_totals_and_average_per_record() {
        let records = vec![
            record("emp_001", "2024-01", "3000"),
            record("emp_002", "2024-01", "4500"),
            record("emp_001", "2024-02", "3000"),
        ];

        let stats = summarize(2, &records);
        assert_eq!(stats.total_employees, 2);
        assert_eq!(stats.total_payroll, dec("10500"));
        assert_eq!(stats.avg_salary, dec("3500"));
        assert_eq!(stats.processed_records, 3);
    }

    #[test]
    fn test_employee_count_independent_of_records() {
        let records = vec![record("emp_001", "2024-01", "1000")];
        let stats = summarize(0, &records);
        assert_eq!(stats.total_employees, 0);
        assert_eq!(stats.processed_records, 1);
    }

    #[test]
    fn test_negative_net_salaries_are_summed() {
        let records = vec![
            record("emp_001", "2024-01", "-200"),
            record("emp_002", "2024-01", "600"),
        ];

        let stats = summarize(2, &records);
        assert_eq!(stats.total_payroll, dec("400"));
        assert_eq!(stats.avg_salary, dec("200"));
    }

    #[test]
    fn test_total_saturates_near_decimal_max() {
        let mut near_max = record("emp_001", "2024-01", "0");
        near_max.payroll.net_salary = Decimal::MAX;
        let records = vec![near_max.clone(), near_max];

        let stats = summarize(1, &records);
        assert_eq!(stats.total_payroll, Decimal::MAX);
        assert_eq!(stats.avg_salary, Decimal::MAX / Decimal::from(2));
    }
}
