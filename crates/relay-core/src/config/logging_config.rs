//! Logging configuration

use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive for `tracing_subscriber::EnvFilter`
    pub fn filter_directive(&self) -> String {
        match self.level.to_lowercase().as_str() {
            level @ ("trace" | "debug" | "info" | "warn" | "error" | "off") => level.to_string(),
            // Anything else is passed through so callers can use full directives
            _ => self.level.clone(),
        }
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }

    pub fn is_compact(&self) -> bool {
        self.format.eq_ignore_ascii_case("compact")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "pretty");
        assert!(!config.is_json());
    }

    #[test]
    fn test_filter_directive() {
        let config = LoggingConfig {
            level: "DEBUG".into(),
            format: "json".into(),
        };
        assert_eq!(config.filter_directive(), "debug");
        assert!(config.is_json());

        let custom = LoggingConfig {
            level: "relay_core=trace".into(),
            format: "compact".into(),
        };
        assert_eq!(custom.filter_directive(), "relay_core=trace");
        assert!(custom.is_compact());
    }

    #[test]
    fn test_directive_is_accepted_by_env_filter() {
        for level in ["info", "WARN", "relay_core=trace,reqwest=warn"] {
            let config = LoggingConfig {
                level: level.into(),
                ..LoggingConfig::default()
            };
            assert!(tracing_subscriber::EnvFilter::try_new(config.filter_directive()).is_ok());
        }
    }
}
