//! Conversions from foreign error types into RelayError

use super::types::RelayError;
use crate::llm::fallback::DispatchError;

impl From<std::io::Error> for RelayError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err.to_string())
    }
}

impl From<toml::de::Error> for RelayError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("Failed to parse TOML: {}", err))
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::http(format!("Request timed out: {}", err))
        } else {
            Self::http(err.to_string())
        }
    }
}

impl From<DispatchError> for RelayError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Cancelled => Self::Cancelled,
            exhausted @ DispatchError::Exhausted(_) => {
                if exhausted.is_configuration_failure() {
                    Self::config(exhausted.to_string())
                } else {
                    Self::llm(exhausted.to_string())
                }
            }
        }
    }
}
