//! Integration tests for configuration-driven dispatch
//!
//! Builds a dispatcher the way an application would: configuration from an
//! environment lookup, providers from a registry.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use relay_core::{
    CompletionProvider, DispatchRequest, Dispatcher, LlmMessage, LlmResponse, ProviderError,
    ProviderId, ProviderRegistry, ProviderRoute, RelayConfig, RelayError, RelayResult,
};
use tokio_util::sync::CancellationToken;

/// Provider that either always fails or always answers
struct StaticProvider {
    failure: Option<ProviderError>,
    calls: AtomicUsize,
}

impl StaticProvider {
    fn ok() -> Arc<Self> {
        Arc::new(Self {
            failure: None,
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(err: ProviderError) -> Arc<Self> {
        Arc::new(Self {
            failure: Some(err),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for StaticProvider {
    async fn generate(
        &self,
        _system_prompt: &str,
        _messages: &[LlmMessage],
        model: &str,
        _use_tools: bool,
        _cancel: &CancellationToken,
    ) -> Result<LlmResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(LlmResponse::text(model, "done")),
        }
    }
}

fn config_from(vars: &[(&str, &str)]) -> RelayConfig {
    let env: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    RelayConfig::from_lookup(|key| env.get(key).cloned())
}

#[tokio::test]
async fn test_env_configured_chain_falls_back() -> RelayResult<()> {
    let config = config_from(&[
        ("OLLAMA_MODEL", "ollama/qwen2.5"),
        ("GEMINI_API_KEY", "g-key"),
        ("ANTHROPIC_API_KEY", "a-key"),
        ("ANTHROPIC_MODEL", "claude-3-haiku"),
    ]);

    let proxy = StaticProvider::failing(ProviderError::Network("connection refused".into()));
    let google = StaticProvider::failing(ProviderError::RateLimited("quota".into()));
    let anthropic = StaticProvider::ok();
    let openai = StaticProvider::ok();

    let registry = ProviderRegistry::new()
        .with(ProviderId::Proxy, proxy.clone())
        .with(ProviderId::Google, google.clone())
        .with(ProviderId::Anthropic, anthropic.clone())
        .with(ProviderId::OpenAI, openai.clone());

    let dispatcher = Dispatcher::from_config(&config, &registry);
    assert_eq!(
        dispatcher.available_providers(),
        vec![
            ProviderRoute::new(ProviderId::Proxy, "ollama/qwen2.5"),
            ProviderRoute::new(ProviderId::Google, "gemini-2.0-flash-exp"),
            ProviderRoute::new(ProviderId::Anthropic, "claude-3-haiku"),
        ]
    );

    let response = dispatcher
        .dispatch(DispatchRequest::new("sys", vec![LlmMessage::user("hi")]))
        .await?;

    assert_eq!(response.model, "claude-3-haiku");
    assert_eq!(proxy.calls(), 1);
    assert_eq!(google.calls(), 1);
    assert_eq!(anthropic.calls(), 1);
    assert_eq!(openai.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn test_explicit_model_routes_to_vendor() {
    let config = config_from(&[("OPENAI_API_KEY", "o-key")]);
    let proxy = StaticProvider::ok();
    let openai = StaticProvider::ok();
    let registry = ProviderRegistry::new()
        .with(ProviderId::Proxy, proxy.clone())
        .with(ProviderId::OpenAI, openai.clone());

    let dispatcher = Dispatcher::from_config(&config, &registry);
    let report = dispatcher
        .dispatch_report(DispatchRequest::new("sys", vec![]).with_model("gpt-4o-mini"))
        .await;

    let winner = report.winner().cloned();
    assert_eq!(report.into_outcome().unwrap().model, "gpt-4o-mini");
    assert_eq!(winner.unwrap().provider, ProviderId::OpenAI);
    assert_eq!(proxy.calls(), 0);
}

#[tokio::test]
async fn test_exhausted_dispatch_converts_to_relay_error() {
    let config = config_from(&[]);
    let registry = ProviderRegistry::new().with(
        ProviderId::Proxy,
        StaticProvider::failing(ProviderError::Timeout { seconds: 60 }),
    );

    let err: RelayError = Dispatcher::from_config(&config, &registry)
        .dispatch(DispatchRequest::new("sys", vec![]))
        .await
        .unwrap_err()
        .into();

    assert!(matches!(err, RelayError::Llm { .. }));
    assert!(err.to_string().contains("proxy: Request timed out after 60 seconds"));
}

#[tokio::test]
async fn test_no_providers_is_a_configuration_error() {
    let dispatcher = Dispatcher::from_config(&config_from(&[]), &ProviderRegistry::new());
    assert!(dispatcher.default_model().is_none());

    let err: RelayError = dispatcher
        .dispatch(DispatchRequest::new("sys", vec![]))
        .await
        .unwrap_err()
        .into();

    assert!(matches!(err, RelayError::Config { .. }));
}
