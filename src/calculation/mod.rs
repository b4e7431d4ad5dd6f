//! Calculation logic for the payroll engine.
//!
//! This module contains the bracket tax rule and the payroll breakdown
//! calculation built on top of it. Both are pure functions.

mod payroll;
mod tax;

pub use crate::config::DEFAULT_WORKING_DAYS;
pub use payroll::calculate_payroll;
pub use tax::{bracket_rate, calculate_bracket_tax};
