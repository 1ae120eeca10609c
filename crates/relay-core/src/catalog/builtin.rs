//! Built-in vendor model lists

use super::types::ModelDescriptor;
use crate::llm::ProviderId;

const ANTHROPIC_MODELS: &[(&str, &str, u32)] = &[
    ("claude-opus-4-1-20250805", "Claude Opus 4.1", 200_000),
    ("claude-sonnet-4-20250514", "Claude Sonnet 4", 200_000),
    ("claude-3-5-sonnet-20241022", "Claude 3.5 Sonnet", 200_000),
];

const OPENAI_MODELS: &[(&str, &str, u32)] = &[
    ("o3-2025-04-16", "o3", 200_000),
    ("gpt-4.1-2025-04-14", "GPT-4.1", 1_047_576),
    ("gpt-4o", "GPT-4o", 128_000),
];

const GOOGLE_MODELS: &[(&str, &str, u32)] = &[
    ("gemini-2.5-pro", "Gemini 2.5 Pro", 1_000_000),
    ("gemini-2.5-flash", "Gemini 2.5 Flash", 1_000_000),
    ("gemini-2.0-flash-exp", "Gemini 2.0 Flash (experimental)", 1_000_000),
];

/// Vendors with a built-in list, in listing order
pub const BUILTIN_ORDER: [ProviderId; 3] =
    [ProviderId::Anthropic, ProviderId::OpenAI, ProviderId::Google];

/// Built-in models for a vendor; empty for the proxy and custom providers
pub fn builtin_models(provider: &ProviderId) -> Vec<ModelDescriptor> {
    let table = match provider {
        ProviderId::Anthropic => ANTHROPIC_MODELS,
        ProviderId::OpenAI => OPENAI_MODELS,
        ProviderId::Google => GOOGLE_MODELS,
        ProviderId::Proxy | ProviderId::Custom(_) => &[],
    };

    table
        .iter()
        .map(|(name, title, window)| ModelDescriptor::new(provider.as_str(), *name, *title, *window))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_lists_are_tagged_with_vendor() {
        for provider in BUILTIN_ORDER {
            let models = builtin_models(&provider);
            assert!(!models.is_empty());
            assert!(models.iter().all(|m| m.provider == provider.as_str()));
        }
    }

    #[test]
    fn test_default_models_are_listed() {
        let names = |id| {
            builtin_models(&id)
                .into_iter()
                .map(|m| m.name)
                .collect::<Vec<_>>()
        };
        assert!(names(ProviderId::Anthropic).contains(&"claude-3-5-sonnet-20241022".to_string()));
        assert!(names(ProviderId::OpenAI).contains(&"gpt-4o".to_string()));
        assert!(names(ProviderId::Google).contains(&"gemini-2.0-flash-exp".to_string()));
    }

    #[test]
    fn test_proxy_has_no_builtin_list() {
        assert!(builtin_models(&ProviderId::Proxy).is_empty());
        assert!(builtin_models(&ProviderId::Custom("mistral".into())).is_empty());
    }
}
