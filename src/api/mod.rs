//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for registering employees,
//! calculating payroll and reading the dashboard and department reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    validate_new_employee, CalculatePayrollRequest, CreateEmployeeRequest, PeriodQuery, MAX_AMOUNT,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
