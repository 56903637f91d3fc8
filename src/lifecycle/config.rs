//! System configuration loaded from environment variables.

use crate::clients::DEFAULT_PAGE_SIZE;

const DEFAULT_BUFFER_SIZE: usize = 32;

/// Runtime settings with sensible defaults.
///
/// Reads from environment variables:
/// - `ORDER_LEDGER_BUFFER` - mailbox capacity of every actor (default: `32`)
/// - `ORDER_LEDGER_DEFAULT_PAGE_SIZE` - page size when a caller gives none (default: `10`)
/// - `RUST_LOG` - tracing filter directive (default: `"info"`)
///
/// Unparseable or zero numbers fall back to the default.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    pub buffer_size: usize,
    pub default_page_size: usize,
    pub log_level: String,
}

impl SystemConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let positive = |key: &str, default: usize| {
            lookup(key)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(default)
        };
        Self {
            buffer_size: positive("ORDER_LEDGER_BUFFER", DEFAULT_BUFFER_SIZE),
            default_page_size: positive("ORDER_LEDGER_DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            default_page_size: DEFAULT_PAGE_SIZE,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = SystemConfig::default();
        assert_eq!(config.buffer_size, 32);
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_vars_match_default() {
        assert_eq!(SystemConfig::from_lookup(lookup(&[])), SystemConfig::default());
    }

    #[test]
    fn test_reads_overrides() {
        let config = SystemConfig::from_lookup(lookup(&[
            ("ORDER_LEDGER_BUFFER", "128"),
            ("ORDER_LEDGER_DEFAULT_PAGE_SIZE", "25"),
            ("RUST_LOG", "debug"),
        ]));
        assert_eq!(config.buffer_size, 128);
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = SystemConfig::from_lookup(lookup(&[
            ("ORDER_LEDGER_BUFFER", "0"),
            ("ORDER_LEDGER_DEFAULT_PAGE_SIZE", "ten"),
        ]));
        assert_eq!(config.buffer_size, 32);
        assert_eq!(config.default_page_size, 10);
    }
}
