//! Request dispatch across the fallback chain

use std::sync::Arc;

use parking_lot::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use super::builder::ChainBuilder;
use super::errors::{AttemptErrors, DispatchError};
use super::report::{AttemptPhase, AttemptRecord, AttemptResult, DispatchReport};
use super::request::DispatchRequest;
use super::types::{ChainEntry, FallbackChain, ProviderRoute};
use crate::config::RelayConfig;
use crate::llm::messages::LlmResponse;
use crate::llm::provider::ProviderError;
use crate::llm::registry::ProviderRegistry;

/// Routes requests to the first provider that succeeds
///
/// The chain is shared read-only by all concurrent calls. Each call takes a
/// snapshot when it starts, so a concurrent [`reconfigure`](Self::reconfigure)
/// is seen either entirely or not at all.
#[derive(Debug)]
pub struct Dispatcher {
    chain: RwLock<Arc<FallbackChain>>,
}

impl Dispatcher {
    pub fn new(chain: FallbackChain) -> Self {
        Self {
            chain: RwLock::new(Arc::new(chain)),
        }
    }

    /// Build the chain from configuration and wrap it in a dispatcher
    pub fn from_config(config: &RelayConfig, registry: &ProviderRegistry) -> Self {
        Self::new(ChainBuilder::build(config, registry))
    }

    /// Current chain snapshot
    pub fn chain(&self) -> Arc<FallbackChain> {
        self.chain.read().clone()
    }

    /// Swap in a new chain, returning the previous one
    pub fn replace_chain(&self, chain: FallbackChain) -> Arc<FallbackChain> {
        std::mem::replace(&mut *self.chain.write(), Arc::new(chain))
    }

    /// Rebuild the chain from new configuration and swap it in
    pub fn reconfigure(&self, config: &RelayConfig, registry: &ProviderRegistry) {
        let chain = ChainBuilder::build(config, registry);
        info!("Reconfigured fallback chain with {} provider(s)", chain.len());
        self.replace_chain(chain);
    }

    /// Provider and model at the head of the chain
    pub fn default_model(&self) -> Option<ProviderRoute> {
        self.chain().head().map(|e| e.route().clone())
    }

    /// Every provider in the chain, in order
    pub fn available_providers(&self) -> Vec<ProviderRoute> {
        self.chain().routes()
    }

    /// Generate a completion with fallback support
    pub async fn dispatch(&self, request: DispatchRequest) -> Result<LlmResponse, DispatchError> {
        self.dispatch_report(request).await.into_outcome()
    }

    /// Like [`dispatch`](Self::dispatch), also returning every attempt made
    #[instrument(
        skip_all,
        fields(model = request.model.as_deref().unwrap_or(""), use_tools = request.use_tools)
    )]
    pub async fn dispatch_report(&self, request: DispatchRequest) -> DispatchReport {
        let chain = self.chain();
        let cancel = request.cancellation.clone().unwrap_or_default();
        let mut attempts = Vec::new();

        // Preferred attempt: best effort, its failure is not part of the
        // aggregated error list
        if let Some(model) = request.explicit_model() {
            match chain.resolve(model) {
                Some(entry) => {
                    debug!(
                        "Attempting to use requested model: {} via {}",
                        model,
                        entry.provider()
                    );
                    let result = invoke(entry, model, &request, &cancel).await;
                    let record = |status| AttemptRecord {
                        provider: entry.provider().clone(),
                        model: model.to_string(),
                        phase: AttemptPhase::Preferred,
                        result: status,
                    };

                    match result {
                        Ok(response) => {
                            attempts.push(record(AttemptResult::Succeeded));
                            info!(
                                "Successfully generated message using {} with requested model {}",
                                entry.provider(),
                                model
                            );
                            return DispatchReport {
                                outcome: Ok(response),
                                attempts,
                            };
                        }
                        Err(err) if err.is_cancellation() => {
                            attempts.push(record(AttemptResult::Cancelled));
                            info!("Dispatch cancelled during requested model attempt");
                            return DispatchReport {
                                outcome: Err(DispatchError::Cancelled),
                                attempts,
                            };
                        }
                        Err(err) => {
                            attempts.push(record(AttemptResult::Failed(err.to_string())));
                            warn!(
                                "Failed to use requested model {}: {}. Falling back to chain.",
                                model, err
                            );
                        }
                    }
                }
                None => debug!("No provider in the chain matches requested model {}", model),
            }
        }

        let mut errors = AttemptErrors::new();

        // The provider tried above is tried again here with its own default model
        for entry in chain.entries() {
            debug!(
                "Attempting to generate message with {} using model {}",
                entry.provider(),
                entry.model()
            );
            let result = invoke(entry, entry.model(), &request, &cancel).await;
            let record = |status| AttemptRecord {
                provider: entry.provider().clone(),
                model: entry.model().to_string(),
                phase: AttemptPhase::Chain,
                result: status,
            };

            match result {
                Ok(response) => {
                    attempts.push(record(AttemptResult::Succeeded));
                    info!(
                        "Successfully generated message using {} with model {}",
                        entry.provider(),
                        entry.model()
                    );
                    return DispatchReport {
                        outcome: Ok(response),
                        attempts,
                    };
                }
                Err(err) if err.is_cancellation() => {
                    attempts.push(record(AttemptResult::Cancelled));
                    info!("Dispatch cancelled while trying {}", entry.provider());
                    return DispatchReport {
                        outcome: Err(DispatchError::Cancelled),
                        attempts,
                    };
                }
                Err(err) => {
                    let message = err.to_string();
                    warn!(
                        "Provider {} failed: {}. Trying next provider...",
                        entry.provider(),
                        message
                    );
                    attempts.push(record(AttemptResult::Failed(message.clone())));
                    errors.push(entry.provider().clone(), message);
                }
            }
        }

        let err = DispatchError::Exhausted(errors);
        error!("{}", err);
        DispatchReport {
            outcome: Err(err),
            attempts,
        }
    }
}

/// Invoke one provider, aborting it when `cancel` fires.
///
/// Any failure observed after cancellation is reported as cancellation.
async fn invoke(
    entry: &ChainEntry,
    model: &str,
    request: &DispatchRequest,
    cancel: &CancellationToken,
) -> Result<LlmResponse, ProviderError> {
    if cancel.is_cancelled() {
        return Err(ProviderError::Cancelled);
    }

    let result = tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ProviderError::Cancelled),
        result = entry.service().generate(
            &request.system_prompt,
            &request.messages,
            model,
            request.use_tools,
            cancel,
        ) => result,
    };

    match result {
        Err(_) if cancel.is_cancelled() => Err(ProviderError::Cancelled),
        other => other,
    }
}
