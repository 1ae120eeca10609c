//! Model name to chain entry resolution
//!
//! The rules are substring heuristics evaluated in a fixed order; the first
//! rule that produces a decision wins. Changing the order changes routing.

use super::types::ProviderRoute;
use crate::llm::provider::ProviderId;

/// One step of model resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionRule {
    /// The model equals an entry's default model
    ExactMatch,
    /// The model contains an entry's provider id
    ProviderSubstring,
    /// The model contains one of `keywords`; the decision is the `target`
    /// entry, or nothing when `target` is not in the chain
    FamilyKeyword {
        keywords: &'static [&'static str],
        target: ProviderId,
    },
}

static RULES: [ResolutionRule; 6] = [
    ResolutionRule::ExactMatch,
    ResolutionRule::ProviderSubstring,
    ResolutionRule::FamilyKeyword {
        keywords: &["ollama"],
        target: ProviderId::Proxy,
    },
    ResolutionRule::FamilyKeyword {
        keywords: &["gemini", "google"],
        target: ProviderId::Google,
    },
    ResolutionRule::FamilyKeyword {
        keywords: &["claude", "anthropic"],
        target: ProviderId::Anthropic,
    },
    ResolutionRule::FamilyKeyword {
        keywords: &["gpt", "openai"],
        target: ProviderId::OpenAI,
    },
];

/// Outcome of evaluating a single rule
enum Decision {
    Match(usize),
    NoMatch,
    /// The rule claimed the model but its target is absent; stop here
    Unavailable,
}

impl ResolutionRule {
    fn evaluate<T: AsRef<ProviderRoute>>(&self, model: &str, entries: &[T]) -> Decision {
        match self {
            ResolutionRule::ExactMatch => {
                find(entries, |r| r.model == model).map_or(Decision::NoMatch, Decision::Match)
            }
            ResolutionRule::ProviderSubstring => find(entries, |r| {
                model.contains(r.provider.as_str())
            })
            .map_or(Decision::NoMatch, Decision::Match),
            ResolutionRule::FamilyKeyword { keywords, target } => {
                if !keywords.iter().any(|k| model.contains(k)) {
                    return Decision::NoMatch;
                }
                find(entries, |r| &r.provider == target)
                    .map_or(Decision::Unavailable, Decision::Match)
            }
        }
    }
}

fn find<T, F>(entries: &[T], pred: F) -> Option<usize>
where
    T: AsRef<ProviderRoute>,
    F: Fn(&ProviderRoute) -> bool,
{
    entries.iter().position(|e| pred(e.as_ref()))
}

impl std::fmt::Display for ResolutionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionRule::ExactMatch => write!(f, "exact model match"),
            ResolutionRule::ProviderSubstring => write!(f, "provider name in model"),
            ResolutionRule::FamilyKeyword { keywords, target } => {
                write!(f, "family keyword {} -> {}", keywords.join("|"), target)
            }
        }
    }
}

/// Resolves an explicitly requested model to the entry to try first
pub struct ModelResolver;

impl ModelResolver {
    /// The fixed, ordered rule list
    pub fn rules() -> &'static [ResolutionRule] {
        &RULES
    }

    /// Index of the preferred entry for `model`, if any
    pub fn resolve<T: AsRef<ProviderRoute>>(model: &str, entries: &[T]) -> Option<usize> {
        Self::resolve_with_rule(model, entries).map(|(index, _)| index)
    }

    /// Like [`resolve`](Self::resolve), also returning the rule that matched
    pub fn resolve_with_rule<T: AsRef<ProviderRoute>>(
        model: &str,
        entries: &[T],
    ) -> Option<(usize, &'static ResolutionRule)> {
        for rule in Self::rules() {
            match rule.evaluate(model, entries) {
                Decision::Match(index) => return Some((index, rule)),
                Decision::NoMatch => continue,
                Decision::Unavailable => return None,
            }
        }
        None
    }
}
