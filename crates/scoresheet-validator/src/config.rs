//! Validator configuration from environment variables.

use std::env;

pub const DEFAULT_DESTINATION_BONUS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Search for a replacement when a syntax-error move fails in context
    pub autocorrect: bool,

    /// Distance reduction for candidates sharing the attempted destination square
    pub destination_bonus: usize,

    /// Flag adjacent checking moves by the same side
    pub consecutive_checks: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            autocorrect: true,
            destination_bonus: DEFAULT_DESTINATION_BONUS,
            consecutive_checks: true,
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from `SCORESHEET_*` environment variables, falling
    /// back to defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            autocorrect: lookup("SCORESHEET_AUTOCORRECT")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.autocorrect),
            destination_bonus: lookup("SCORESHEET_DESTINATION_BONUS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.destination_bonus),
            consecutive_checks: lookup("SCORESHEET_CONSECUTIVE_CHECKS")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.consecutive_checks),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
