//! File-based configuration loading

use super::model::RelayConfig;
use crate::error::{RelayError, RelayResult};
use std::fs;
use std::path::Path;

/// Load configuration from a file
///
/// Supports TOML and JSON formats based on file extension.
/// Returns default config if file doesn't exist.
pub fn load_from_file(path: &Path) -> RelayResult<RelayConfig> {
    if !path.exists() {
        return Ok(RelayConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        RelayError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    let config: RelayConfig = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            RelayError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            RelayError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
    };

    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ProviderId;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("relay.toml");
        fs::write(
            &config_path,
            r#"
[proxy]
url = "http://litellm:4000"
model = "ollama/llama3.2"

[google]
api_key = "g-key"

[logging]
level = "debug"
format = "compact"
"#,
        )
        .unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.proxy_url(), "http://litellm:4000");
        assert_eq!(config.model_for(&ProviderId::Proxy), "ollama/llama3.2");
        assert!(config.has_credential(&ProviderId::Google));
        assert_eq!(config.model_for(&ProviderId::Google), "gemini-2.0-flash-exp");
        assert_eq!(config.logging.format, "compact");
    }

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("relay.json");
        fs::write(
            &config_path,
            r#"{ "openai": { "api_key": "o-key", "model": "gpt-4o-mini" } }"#,
        )
        .unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert!(config.has_credential(&ProviderId::OpenAI));
        assert_eq!(config.model_for(&ProviderId::OpenAI), "gpt-4o-mini");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let config = load_from_file(Path::new("/nonexistent/relay.toml")).unwrap();
        assert_eq!(config, RelayConfig::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("relay.toml");
        fs::write(&config_path, "[proxy\nurl = ").unwrap();

        let err = load_from_file(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML config"));
        assert!(err.context().unwrap().contains("relay.toml"));
    }
}
