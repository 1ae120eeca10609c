//! Scripted providers that record every invocation

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

use super::super::types::{ChainEntry, FallbackChain};
use crate::llm::messages::{LlmMessage, LlmResponse};
use crate::llm::provider::{CompletionProvider, ProviderError, ProviderId};

/// One recorded invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub provider: ProviderId,
    pub model: String,
}

impl Call {
    pub fn new(provider: ProviderId, model: &str) -> Self {
        Self {
            provider,
            model: model.to_string(),
        }
    }
}

/// What a provider does on its next invocation
pub enum Step {
    Reply,
    Fail(ProviderError),
    /// Never completes on its own
    Hang,
    /// Cancels the caller's token, then reports a transport error
    CancelAndFail,
    /// Signals `started`, waits for `release`, then fails
    Gate {
        started: Arc<Notify>,
        release: Arc<Notify>,
    },
}

pub struct RecordingProvider {
    id: ProviderId,
    log: Arc<Mutex<Vec<Call>>>,
    steps: Mutex<VecDeque<Step>>,
}

#[async_trait]
impl CompletionProvider for RecordingProvider {
    async fn generate(
        &self,
        _system_prompt: &str,
        _messages: &[LlmMessage],
        model: &str,
        _use_tools: bool,
        cancel: &CancellationToken,
    ) -> Result<LlmResponse, ProviderError> {
        self.log.lock().push(Call::new(self.id.clone(), model));
        let step = self.steps.lock().pop_front().unwrap_or(Step::Reply);

        match step {
            Step::Reply => Ok(LlmResponse::text(model, format!("hello from {}", self.id))),
            Step::Fail(err) => Err(err),
            Step::Hang => std::future::pending().await,
            Step::CancelAndFail => {
                cancel.cancel();
                Err(ProviderError::Network("connection reset".into()))
            }
            Step::Gate { started, release } => {
                started.notify_one();
                release.notified().await;
                Err(ProviderError::Network("gate closed".into()))
            }
        }
    }
}

/// Shared call log for a set of recording providers
#[derive(Default)]
pub struct Harness {
    log: Arc<Mutex<Vec<Call>>>,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn provider(&self, id: ProviderId, steps: Vec<Step>) -> Arc<dyn CompletionProvider> {
        Arc::new(RecordingProvider {
            id,
            log: Arc::clone(&self.log),
            steps: Mutex::new(steps.into()),
        })
    }

    /// Chain entry backed by a recording provider
    pub fn entry(&self, id: ProviderId, model: &str, steps: Vec<Step>) -> ChainEntry {
        ChainEntry::new(id.clone(), self.provider(id, steps), model)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.lock().clone()
    }
}

pub fn chain(entries: Vec<ChainEntry>) -> FallbackChain {
    FallbackChain::new(entries).unwrap()
}

pub fn rate_limited() -> Step {
    Step::Fail(ProviderError::RateLimited("429 Too Many Requests".into()))
}
