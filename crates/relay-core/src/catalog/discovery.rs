//! Model discovery against a LiteLLM proxy and a local Ollama daemon

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use super::types::{DEFAULT_CONTEXT_WINDOW, ModelDescriptor};
use crate::error::RelayResult;
use crate::llm::ProviderId;

pub const PROXY_DISCOVERY_TIMEOUT: Duration = Duration::from_secs(5);
pub const OLLAMA_DISCOVERY_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Deserialize)]
struct ProxyModelInfo {
    data: Vec<ProxyModel>,
}

#[derive(Debug, Deserialize)]
struct ProxyModel {
    model_name: Option<String>,
    #[serde(default)]
    litellm_params: Option<LitellmParams>,
}

#[derive(Debug, Deserialize)]
struct LitellmParams {
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OllamaTags {
    #[serde(default)]
    models: Vec<OllamaModel>,
}

#[derive(Debug, Deserialize)]
struct OllamaModel {
    name: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse a `/model/info` payload.
///
/// Fails when the payload has no `data` array.
pub fn parse_proxy_models(body: &str) -> RelayResult<Vec<ModelDescriptor>> {
    let info: ProxyModelInfo = serde_json::from_str(body)?;

    Ok(info
        .data
        .into_iter()
        .map(|model| {
            let model_name = non_empty(model.model_name);
            let routed = non_empty(model.litellm_params.and_then(|p| p.model));
            let name = routed.or_else(|| model_name.clone()).unwrap_or_default();
            let title = model_name
                .or_else(|| non_empty(Some(name.clone())))
                .unwrap_or_else(|| "Unknown".to_string());
            ModelDescriptor::new(
                ProviderId::Proxy.as_str(),
                name,
                title,
                DEFAULT_CONTEXT_WINDOW,
            )
        })
        .collect())
}

/// Parse an `/api/tags` payload, appending to `existing`.
///
/// Models already present by name or title are skipped.
pub fn merge_ollama_models(body: &str, existing: &mut Vec<ModelDescriptor>) -> RelayResult<usize> {
    let tags: OllamaTags = serde_json::from_str(body)?;
    let mut added = 0;

    for model in tags.models {
        let name = format!("ollama/{}", model.name);
        let duplicate = existing
            .iter()
            .any(|m| m.name == name || m.title == model.name);
        if duplicate {
            debug!("Skipping duplicate Ollama model {}", name);
            continue;
        }
        existing.push(ModelDescriptor::new(
            ProviderId::Proxy.as_str(),
            name,
            model.name,
            DEFAULT_CONTEXT_WINDOW,
        ));
        added += 1;
    }

    Ok(added)
}

/// Fetch a discovery endpoint and return the body of a successful response
pub(super) async fn fetch(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> RelayResult<String> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await?
        .error_for_status()?;
    Ok(response.text().await?)
}
