//! Per-attempt telemetry of a dispatch call

use serde::Serialize;

use super::errors::DispatchError;
use crate::llm::messages::LlmResponse;
use crate::llm::provider::ProviderId;

/// Which step of the dispatch issued an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptPhase {
    /// Best-effort try of the entry resolved from the explicit model
    Preferred,
    /// Regular walk over the chain
    Chain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "message")]
pub enum AttemptResult {
    Succeeded,
    Failed(String),
    Cancelled,
}

/// One provider invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptRecord {
    pub provider: ProviderId,
    pub model: String,
    pub phase: AttemptPhase,
    pub result: AttemptResult,
}

impl AttemptRecord {
    pub fn succeeded(&self) -> bool {
        self.result == AttemptResult::Succeeded
    }
}

/// Outcome of a dispatch call together with every attempt it made
#[derive(Debug, Clone)]
pub struct DispatchReport {
    pub outcome: Result<LlmResponse, DispatchError>,
    /// Attempts in the order they were issued
    pub attempts: Vec<AttemptRecord>,
}

impl DispatchReport {
    /// The attempt that produced the response
    pub fn winner(&self) -> Option<&AttemptRecord> {
        self.attempts.iter().find(|a| a.succeeded())
    }

    pub fn into_outcome(self) -> Result<LlmResponse, DispatchError> {
        self.outcome
    }
}
