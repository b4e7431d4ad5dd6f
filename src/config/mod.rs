//! Configuration loading and management for the payroll engine.
//!
//! This module loads the engine configuration (server address, tax rule and
//! payroll defaults) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Tax threshold: {}", config.tax_policy().threshold);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_BIND_ADDRESS, DEFAULT_WORKING_DAYS, EngineConfig, PayrollSettings, ServerConfig,
    TaxPolicy,
};
