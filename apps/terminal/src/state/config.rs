//! # Configuration State
//!
//! Builds the starting [`SystemConfig`] for a session.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKWATCH_*`)
//! 2. Defaults (`SystemConfig::default()`: 30%, 3 days, 0/30/50/70% markdowns)
//!
//! The operator can change the threshold and warning window at runtime from
//! the settings menu; nothing is written back.

use std::env;

use stockwatch_core::validation::{validate_threshold_percent, validate_warning_days};
use stockwatch_core::{DiscountPolicy, SystemConfig};

/// Stock threshold in percent, e.g. `30`.
pub const ENV_STOCK_THRESHOLD: &str = "STOCKWATCH_STOCK_THRESHOLD";

/// Expiry warning window in days, e.g. `3`.
pub const ENV_EXPIRY_WARNING_DAYS: &str = "STOCKWATCH_EXPIRY_WARNING_DAYS";

/// Discount schedule as `days:rate` pairs, e.g. `3:0,2:0.3,1:0.5,0:0.7`.
pub const ENV_DISCOUNT_POLICY: &str = "STOCKWATCH_DISCOUNT_POLICY";

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

/// Loads the session configuration from environment variables.
pub fn load_from_env() -> Result<SystemConfig, ConfigError> {
    load_from(|key| env::var(key).ok())
}

/// Loads configuration using `lookup` to resolve variable names.
///
/// Unset or blank variables fall back to the defaults.
pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<SystemConfig, ConfigError> {
    let mut config = SystemConfig::default();
    let invalid = |key: &str| ConfigError::InvalidValue(key.to_string());
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(raw) = get(ENV_STOCK_THRESHOLD) {
        let percent: f64 = raw.trim().parse().map_err(|_| invalid(ENV_STOCK_THRESHOLD))?;
        config.stock_threshold =
            validate_threshold_percent(percent).map_err(|_| invalid(ENV_STOCK_THRESHOLD))?;
    }

    if let Some(raw) = get(ENV_EXPIRY_WARNING_DAYS) {
        let days: i64 = raw
            .trim()
            .parse()
            .map_err(|_| invalid(ENV_EXPIRY_WARNING_DAYS))?;
        validate_warning_days(days).map_err(|_| invalid(ENV_EXPIRY_WARNING_DAYS))?;
        config.expiry_warning_days = days;
    }

    if let Some(raw) = get(ENV_DISCOUNT_POLICY) {
        config.discount_policy = raw
            .parse::<DiscountPolicy>()
            .map_err(|_| invalid(ENV_DISCOUNT_POLICY))?;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load_from(lookup(&[])).unwrap();
        assert_eq!(config, SystemConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = load_from(lookup(&[
            (ENV_STOCK_THRESHOLD, "25"),
            (ENV_EXPIRY_WARNING_DAYS, " 5 "),
            (ENV_DISCOUNT_POLICY, "5:0.1,0:0.9"),
        ]))
        .unwrap();

        assert_eq!(config.stock_threshold, 0.25);
        assert_eq!(config.expiry_warning_days, 5);
        assert_eq!(config.discount_policy.rate_for(5), 0.1);
        assert_eq!(config.discount_policy.rate_for(2), 0.0);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = load_from(lookup(&[(ENV_STOCK_THRESHOLD, "  ")])).unwrap();
        assert_eq!(config.stock_threshold, 0.3);
    }

    #[test]
    fn test_invalid_values() {
        let err = load_from(lookup(&[(ENV_STOCK_THRESHOLD, "abc")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STOCKWATCH_STOCK_THRESHOLD");

        assert!(load_from(lookup(&[(ENV_STOCK_THRESHOLD, "150")])).is_err());
        assert!(load_from(lookup(&[(ENV_EXPIRY_WARNING_DAYS, "-2")])).is_err());
        assert!(load_from(lookup(&[(ENV_DISCOUNT_POLICY, "tomorrow")])).is_err());
    }
}
