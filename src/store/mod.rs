//! In-memory storage for employees and payroll records.
//!
//! The store is constructed once at startup and handed to the HTTP layer
//! through [`AppState`](crate::api::AppState). It owns the one invariant the
//! engine itself cannot: at most one payroll record per employee and period.

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Employee, EmployeeStatus, NewEmployee, PayrollBreakdown, PayrollRecord, PayrollStatus,
};

#[derive(Debug, Default)]
struct Tables {
    employees: Vec<Employee>,
    payroll_records: Vec<PayrollRecord>,
}

/// Shared storage handle for employees and payroll records.
#[derive(Debug, Default)]
pub struct PayrollStore {
    tables: RwLock<Tables>,
}

impl PayrollStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new employee with a generated id and fresh timestamps.
    pub async fn create_employee(&self, new_employee: NewEmployee) -> Employee {
        let now = Utc::now();
        let employee = Employee {
            id: Uuid::new_v4().to_string(),
            name: new_employee.name,
            email: new_employee.email,
            position: new_employee.position,
            department: new_employee.department,
            compensation: new_employee.compensation,
            created_at: now,
            updated_at: now,
            status: EmployeeStatus::Active,
        };

        self.tables.write().await.employees.push(employee.clone());
        info!(employee_id = %employee.id, department = %employee.department, "Employee created");
        employee
    }

    /// Returns all employees in registration order.
    pub async fn list_employees(&self) -> Vec<Employee> {
        self.tables.read().await.employees.clone()
    }

    /// Looks up an employee by id.
    pub async fn get_employee(&self, id: &str) -> EngineResult<Employee> {
        self.tables
            .read()
            .await
            .employees
            .iter()
            .find(|employee| employee.id == id)
            .cloned()
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    /// Number of registered employees.
    pub async fn employee_count(&self) -> usize {
        self.tables.read().await.employees.len()
    }

    /// Calculates and stores the payroll record for an employee and period.
    ///
    /// The employee lookup, the duplicate check and the insert all happen under
    /// one write lock, so two concurrent calls for the same employee and period
    /// cannot both succeed.
    ///
    /// # Errors
    ///
    /// * [`EngineError::EmployeeNotFound`] if no employee has `employee_id`
    /// * [`EngineError::PayrollAlreadyCalculated`] if a record for the pair exists
    pub async fn record_payroll<F>(
        &self,
        employee_id: &str,
        period: &str,
        calculate: F,
    ) -> EngineResult<PayrollRecord>
    where
        F: FnOnce(&Employee) -> PayrollBreakdown,
    {
        let mut tables = self.tables.write().await;

        let employee = tables
            .employees
            .iter()
            .find(|employee| employee.id == employee_id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            })?;

        let exists = tables
            .payroll_records
            .iter()
            .any(|record| record.employee_id == employee_id && record.period == period);
        if exists {
            return Err(EngineError::PayrollAlreadyCalculated {
                employee_id: employee_id.to_string(),
                period: period.to_string(),
            });
        }

        let record = PayrollRecord {
            id: Uuid::new_v4().to_string(),
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            period: period.to_string(),
            payroll: calculate(employee),
            created_at: Utc::now(),
            status: PayrollStatus::Calculated,
        };

        tables.payroll_records.push(record.clone());
        Ok(record)
    }

    /// Returns payroll records, newest first, optionally limited to one period.
    pub async fn list_payroll(&self, period: Option<&str>) -> Vec<PayrollRecord> {
        let tables = self.tables.read().await;
        let records = tables
            .payroll_records
            .iter()
            .filter(|record| period.is_none_or(|p| record.period == p))
            .cloned()
            .collect();
        newest_first(records)
    }

    /// Returns one employee's payroll records, newest first.
    pub async fn payroll_for_employee(&self, employee_id: &str) -> Vec<PayrollRecord> {
        let tables = self.tables.read().await;
        let records = tables
            .payroll_records
            .iter()
            .filter(|record| record.employee_id == employee_id)
            .cloned()
            .collect();
        newest_first(records)
    }
}

/// Orders by creation time descending; insertion order breaks ties, latest
/// insert first.
fn newest_first(mut records: Vec<PayrollRecord>) -> Vec<PayrollRecord> {
    records.reverse();
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    records
}
