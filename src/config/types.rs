//! Configuration types for the payroll engine.
//!
//! These structures are deserialized from the YAML configuration file. Every
//! section is optional and falls back to the built-in defaults.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Default bind address for the HTTP server.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

/// Default number of working days in a pay period.
pub const DEFAULT_WORKING_DAYS: u32 = 22;

/// Single-threshold tax rule applied to the whole gross salary.
///
/// A gross strictly above `threshold` is taxed entirely at `upper_rate`;
/// anything at or below it is taxed entirely at `lower_rate`.
///
/// # Example
///
/// ```
/// use payroll_engine::config::TaxPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = TaxPolicy::default();
/// assert_eq!(policy.threshold, Decimal::from(5000));
/// assert_eq!(policy.lower_rate, Decimal::new(10, 2));
/// assert_eq!(policy.upper_rate, Decimal::new(15, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaxPolicy {
    /// Gross amount at which the upper rate starts to apply (exclusive).
    pub threshold: Decimal,
    /// Rate for a gross at or below the threshold.
    pub lower_rate: Decimal,
    /// Rate for a gross above the threshold.
    pub upper_rate: Decimal,
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self {
            threshold: Decimal::from(5000),
            lower_rate: Decimal::new(10, 2),
            upper_rate: Decimal::new(15, 2),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the server listens on.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

/// Payroll run settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayrollSettings {
    /// Working days assumed when a calculation request does not supply one.
    pub default_working_days: u32,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            default_working_days: DEFAULT_WORKING_DAYS,
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Server settings.
    pub server: ServerConfig,
    /// Tax rule.
    pub tax: TaxPolicy,
    /// Payroll run settings.
    pub payroll: PayrollSettings,
}
