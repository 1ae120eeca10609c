//! Failure aggregation for the chain walk

use std::fmt;

use thiserror::Error;

use crate::llm::provider::ProviderId;

/// A provider that failed during the chain walk and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderFailure {
    pub provider: ProviderId,
    pub message: String,
}

impl fmt::Display for ProviderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.provider, self.message)
    }
}

/// Per-provider failures in attempt order.
///
/// Never reordered or deduplicated: the same provider may legitimately
/// appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttemptErrors {
    failures: Vec<ProviderFailure>,
}

impl AttemptErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, provider: ProviderId, message: impl Into<String>) {
        self.failures.push(ProviderFailure {
            provider,
            message: message.into(),
        });
    }

    pub fn failures(&self) -> &[ProviderFailure] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

/// `p1: e1; p2: e2`
impl fmt::Display for AttemptErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

/// Terminal failure of a dispatch call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The caller's cancellation fired; no further provider was tried
    #[error("Request was cancelled")]
    Cancelled,

    /// Every chain entry failed, or the chain was empty
    #[error("{}", exhausted_message(.0))]
    Exhausted(AttemptErrors),
}

fn exhausted_message(errors: &AttemptErrors) -> String {
    if errors.is_empty() {
        "No fallback providers configured".to_string()
    } else {
        format!("All fallback providers failed. Errors: {}", errors)
    }
}

impl DispatchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// True when the chain had nothing to try
    pub fn is_configuration_failure(&self) -> bool {
        matches!(self, Self::Exhausted(errors) if errors.is_empty())
    }

    /// Recorded failures; empty for cancellation
    pub fn failures(&self) -> &[ProviderFailure] {
        match self {
            Self::Cancelled => &[],
            Self::Exhausted(errors) => errors.failures(),
        }
    }
}
