//! HTTP request handlers for the payroll API.
//!
//! Routing is an explicit table in [`create_router`]; every handler returns a
//! typed `Result` whose error side renders as an [`ApiError`] body.

use std::time::Instant;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::Uri,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_payroll;
use crate::models::{DepartmentSummary, Employee, OrganizationStats, PayrollRecord};
use crate::reporting::{summarize, summarize_by_department};

use super::request::{
    validate_new_employee, CalculatePayrollRequest, CreateEmployeeRequest, PeriodQuery,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/employees", get(list_employees_handler).post(create_employee_handler))
        .route("/employees/:id", get(get_employee_handler))
        .route("/payroll", get(list_payroll_handler))
        .route("/payroll/calculate", post(calculate_handler))
        .route("/payroll/employee/:id", get(employee_payroll_handler))
        .route("/dashboard/stats", get(dashboard_stats_handler))
        .route("/analytics/departments", get(department_analytics_handler))
        .fallback(route_not_found)
        .with_state(state)
}

/// Handler for GET /.
async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "PayTrack API v1.0" }))
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    Ok(Json(state.store().list_employees().await))
}

/// Handler for POST /employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> ApiResult<Employee> {
    let Json(request) = payload?;
    validate_new_employee(&request)?;

    Ok(Json(state.store().create_employee(request).await))
}

/// Handler for GET /employees/:id.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Employee> {
    Ok(Json(state.store().get_employee(&id).await?))
}

/// Handler for POST /payroll/calculate.
///
/// Computes the payroll for one employee and period and stores the record.
/// A second calculation for the same pair is rejected.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculatePayrollRequest>, JsonRejection>,
) -> ApiResult<PayrollRecord> {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll calculation request");

    let Json(request) = payload?;
    request.validate()?;

    let config = state.config();
    let policy = config.tax_policy();
    let working_days = request
        .working_days
        .unwrap_or(config.payroll().default_working_days);

    let start_time = Instant::now();
    let result = state
        .store()
        .record_payroll(&request.employee_id, &request.period, |employee| {
            calculate_payroll(&employee.compensation, policy, working_days)
        })
        .await;

    match result {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %record.employee_id,
                period = %record.period,
                net_salary = %record.payroll.net_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll calculated"
            );
            Ok(Json(record))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                period = %request.period,
                error = %err,
                "Payroll calculation rejected"
            );
            Err(err.into())
        }
    }
}

/// Handler for GET /payroll, newest first, optionally filtered by `?period=`.
async fn list_payroll_handler(
    State(state): State<AppState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> ApiResult<Vec<PayrollRecord>> {
    let Query(query) = query?;
    Ok(Json(state.store().list_payroll(query.period.as_deref()).await))
}

/// Handler for GET /payroll/employee/:id.
async fn employee_payroll_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<PayrollRecord>> {
    Ok(Json(state.store().payroll_for_employee(&id).await))
}

/// Handler for GET /dashboard/stats.
async fn dashboard_stats_handler(
    State(state): State<AppState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> ApiResult<OrganizationStats> {
    let Query(query) = query?;
    let store = state.store();

    let employee_count = store.employee_count().await;
    let records = store.list_payroll(query.period.as_deref()).await;

    Ok(Json(summarize(employee_count, &records)))
}

/// Handler for GET /analytics/departments, sorted by department name.
async fn department_analytics_handler(
    State(state): State<AppState>,
) -> ApiResult<Vec<DepartmentSummary>> {
    let store = state.store();
    let employees = store.list_employees().await;
    let records = store.list_payroll(None).await;

    let summaries = summarize_by_department(&employees, &records);
    Ok(Json(summaries.into_values().collect()))
}

async fn route_not_found(uri: Uri) -> ApiErrorResponse {
    ApiErrorResponse::new(
        axum::http::StatusCode::NOT_FOUND,
        ApiError::route_not_found(uri.path()),
    )
}
