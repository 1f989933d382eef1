//! Daily salary reporting for an HR administration backend.
//!
//! This crate turns attendance records and benefit enrollments into daily
//! salary report rows (base salary plus benefit allowance) and serves them
//! over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
