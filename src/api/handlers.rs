//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{DailySalaryRow, MonthlySalarySummary};

use super::request::DailySalaryRequest;
use super::response::ApiFailure;
use super::state::AppState;

/// Route of the full daily salary report.
pub const DAILY_SALARIES_ROUTE: &str = "/api/DailySalary/dailysalaries";

/// Route of the month-filtered daily salary report for one employee.
pub const EMPLOYEE_MONTH_ROUTE: &str = "/api/DailySalary/employee/date/dailysalaries";

/// Route of the monthly payslip summary for one employee.
pub const EMPLOYEE_MONTH_SUMMARY_ROUTE: &str = "/api/DailySalary/employee/date/summary";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route(DAILY_SALARIES_ROUTE, get(daily_salaries_handler))
        .route(EMPLOYEE_MONTH_ROUTE, post(employee_month_handler))
        .route(EMPLOYEE_MONTH_SUMMARY_ROUTE, post(employee_month_summary_handler))
        .layer(cors)
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "OK"
}

/// Handler for GET /api/DailySalary/dailysalaries.
///
/// Returns every attendance entry annotated with its base salary and the
/// employee's daily allowance.
async fn daily_salaries_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<DailySalaryRow>>, ApiFailure> {
    let correlation_id = Uuid::new_v4();
    let start_time = Instant::now();

    match state.report().get_all_rows() {
        Ok(rows) => {
            info!(
                correlation_id = %correlation_id,
                rows = rows.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Daily salary report assembled"
            );
            Ok(Json(rows))
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Daily salary report failed");
            Err(err.into())
        }
    }
}

/// Handler for POST /api/DailySalary/employee/date/dailysalaries.
///
/// Returns the requested employee's rows whose month matches the request
/// date's month, in any year.
async fn employee_month_handler(
    State(state): State<AppState>,
    payload: Result<Json<DailySalaryRequest>, JsonRejection>,
) -> Result<Json<Vec<DailySalaryRow>>, ApiFailure> {
    let correlation_id = Uuid::new_v4();
    let request = parse_request(correlation_id, payload)?;
    let start_time = Instant::now();

    match state
        .report()
        .get_rows_for_employee_in_month(&request.employee_id, request.date)
    {
        Ok(rows) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                reference_date = %request.date,
                rows = rows.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Monthly daily salary report assembled"
            );
            Ok(Json(rows))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                error = %err,
                "Monthly daily salary report failed"
            );
            Err(err.into())
        }
    }
}

/// Handler for POST /api/DailySalary/employee/date/summary.
///
/// Returns the requested employee's monthly totals, using the same month
/// filter as the monthly report.
async fn employee_month_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<DailySalaryRequest>, JsonRejection>,
) -> Result<Json<MonthlySalarySummary>, ApiFailure> {
    let correlation_id = Uuid::new_v4();
    let request = parse_request(correlation_id, payload)?;
    let start_time = Instant::now();

    match state
        .report()
        .monthly_summary(&request.employee_id, request.date)
    {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                days_worked = summary.days_worked,
                gross_pay = %summary.gross_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Monthly salary summary assembled"
            );
            Ok(Json(summary))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                error = %err,
                "Monthly salary summary failed"
            );
            Err(err.into())
        }
    }
}

fn parse_request(
    correlation_id: Uuid,
    payload: Result<Json<DailySalaryRequest>, JsonRejection>,
) -> Result<DailySalaryRequest, ApiFailure> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Rejected request body"
            );
            Err(rejection.into())
        }
    }
}
