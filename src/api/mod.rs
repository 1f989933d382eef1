//! HTTP API module for the payroll service.
//!
//! This module provides the REST endpoints serving the daily salary report,
//! its month-filtered variant, and the monthly payslip summary.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{
    DAILY_SALARIES_ROUTE, EMPLOYEE_MONTH_ROUTE, EMPLOYEE_MONTH_SUMMARY_ROUTE, create_router,
};
pub use request::DailySalaryRequest;
pub use response::ApiFailure;
pub use state::AppState;
