//! Reporting aggregations over stored payroll records.
//!
//! Two read-only folds: organization-wide statistics for the dashboard and
//! per-department statistics for the analytics view.

mod department;
mod organization;

pub use department::{latest_records, summarize_by_department};
pub use organization::summarize;
