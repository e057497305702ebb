//! # Configuration
//!
//! Tunables for the engine and the actor that hosts it. Every field has a
//! default, so an empty document deserialises to [`LendingConfig::default`].
//! [`LendingConfig::from_env`] layers `LENDING_*` variables on top of the
//! defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Longest accepted loan period, roughly a century.
pub const MAX_LOAN_PERIOD_DAYS: u32 = 36_500;

/// Engine and runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LendingConfig {
    /// Maximum number of cached search results.
    pub cache_capacity: usize,
    /// Length of a reservation before it is considered overdue.
    pub loan_period_days: u32,
    /// Capacity of the request channel in front of the service actor.
    pub channel_buffer: usize,
}

impl Default for LendingConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 50,
            loan_period_days: 14,
            channel_buffer: 32,
        }
    }
}

impl LendingConfig {
    /// Defaults overridden by `LENDING_CACHE_CAPACITY`, `LENDING_LOAN_PERIOD_DAYS`
    /// and `LENDING_CHANNEL_BUFFER` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        override_with(&lookup, "LENDING_CACHE_CAPACITY", &mut config.cache_capacity)?;
        override_with(&lookup, "LENDING_LOAN_PERIOD_DAYS", &mut config.loan_period_days)?;
        override_with(&lookup, "LENDING_CHANNEL_BUFFER", &mut config.channel_buffer)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "cache_capacity",
                reason: "must be greater than zero".into(),
            });
        }
        if self.loan_period_days == 0 {
            return Err(ConfigError::Invalid {
                field: "loan_period_days",
                reason: "must be greater than zero".into(),
            });
        }
        if self.loan_period_days > MAX_LOAN_PERIOD_DAYS {
            return Err(ConfigError::Invalid {
                field: "loan_period_days",
                reason: format!("must be at most {MAX_LOAN_PERIOD_DAYS}"),
            });
        }
        if self.channel_buffer == 0 {
            return Err(ConfigError::Invalid {
                field: "channel_buffer",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    pub fn loan_period(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.loan_period_days))
    }
}

fn override_with<F, T>(lookup: &F, var: &'static str, slot: &mut T) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(value) = lookup(var) {
        let parsed: Option<T> = value.trim().parse().ok();
        match parsed {
            Some(parsed) => *slot = parsed,
            None => return Err(ConfigError::Env { var, value }),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = LendingConfig::default();
        assert_eq!(config.cache_capacity, 50);
        assert_eq!(config.loan_period(), chrono::Duration::days(14));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lookup_overrides_defaults() {
        let config = LendingConfig::from_lookup(lookup_from(&[
            ("LENDING_CACHE_CAPACITY", "8"),
            ("LENDING_LOAN_PERIOD_DAYS", " 7 "),
        ]))
        .unwrap();

        assert_eq!(config.cache_capacity, 8);
        assert_eq!(config.loan_period_days, 7);
        assert_eq!(config.channel_buffer, 32);
    }

    #[test]
    fn test_unparsable_override_is_reported() {
        let err =
            LendingConfig::from_lookup(lookup_from(&[("LENDING_CHANNEL_BUFFER", "lots")]))
                .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Env {
                var: "LENDING_CHANNEL_BUFFER",
                value: "lots".into()
            }
        );
    }

    #[test]
    fn test_zero_capacity_fails_validation() {
        let err = LendingConfig::from_lookup(lookup_from(&[("LENDING_CACHE_CAPACITY", "0")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "cache_capacity",
                ..
            }
        ));
    }

    #[test]
    fn test_loan_period_past_a_century_fails_validation() {
        let config = LendingConfig {
            loan_period_days: 200_000_000,
            ..LendingConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "loan_period_days",
                ..
            })
        ));

        let at_limit = LendingConfig {
            loan_period_days: MAX_LOAN_PERIOD_DAYS,
            ..LendingConfig::default()
        };
        assert!(at_limit.validate().is_ok());

        let err = LendingConfig::from_lookup(lookup_from(&[(
            "LENDING_LOAN_PERIOD_DAYS",
            "36501",
        )]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "loan_period_days",
                ..
            }
        ));
    }
}
