//! Payroll Calculation & Reporting Engine
//!
//! This crate computes per-period payroll breakdowns from employee
//! compensation terms, folds stored payroll records into dashboard and
//! department statistics, and serves both over a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod reporting;
pub mod store;
