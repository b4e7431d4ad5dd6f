//! Per-department payroll statistics.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use crate::models::{DepartmentSummary, Employee, PayrollRecord};

/// Selects the most recent record for every employee that has one.
///
/// "Most recent" is the greatest `created_at`. When two records for the same
/// employee share a timestamp, the one that appears first in `records` wins.
pub fn latest_records(records: &[PayrollRecord]) -> HashMap<&str, &PayrollRecord> {
    let mut latest: HashMap<&str, &PayrollRecord> = HashMap::new();

    for record in records {
        latest
            .entry(record.employee_id.as_str())
            .and_modify(|current| {
                if record.created_at > current.created_at {
                    *current = record;
                }
            })
            .or_insert(record);
    }

    latest
}

/// Groups employees by department and sums each employee's latest net salary.
///
/// Every employee counts toward its department, paid or not; only the latest
/// record of each employee contributes to the total. Departments are keyed by
/// the raw `department` value, so a blank department forms its own group.
///
/// # Examples
///
/// ```
/// use payroll_engine::reporting::summarize_by_department;
///
/// let summaries = summarize_by_department(&[], &[]);
/// assert!(summaries.is_empty());
/// ```
pub fn summarize_by_department(
    employees: &[Employee],
    records: &[PayrollRecord],
) -> BTreeMap<String, DepartmentSummary> {
    let latest = latest_records(records);
    let mut departments: BTreeMap<String, DepartmentSummary> = BTreeMap::new();

    for employee in employees {
        let summary = departments
            .entry(employee.department.clone())
            .or_insert_with(|| DepartmentSummary::new(employee.department.as_str()));

        summary.employee_count += 1;
        if let Some(record) = latest.get(employee.id.as_str()) {
            summary.total_salary = summary.total_salary.saturating_add(record.net_salary());
        }
    }

    // Every key was inserted alongside an increment, so the count is at least 1.
    for summary in departments.values_mut() {
        summary.avg_salary = summary.total_salary / Decimal::from(summary.employee_count);
    }

    departments
}
