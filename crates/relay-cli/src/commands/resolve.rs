//! Requested-model resolution command

use crate::console::CliConsole;
use colored::*;
use relay_core::{ChainBuilder, ModelResolver, ProviderId, RelayConfig};

/// Print the entry a requested model would be tried on first
pub fn show(config: &RelayConfig, registered: &[ProviderId], model: &str) {
    let console = CliConsole::new(true);
    let routes = ChainBuilder::plan(config, |id| registered.contains(id));

    match ModelResolver::resolve_with_rule(model, &routes) {
        Some((index, rule)) => {
            let route = &routes[index];
            console.success(&format!(
                "{} is tried first on {}",
                model,
                route.provider.as_str().bold()
            ));
            println!("  matched by: {}", rule.to_string().cyan());
            println!(
                "  then the chain, starting with {} ({})",
                routes[0].provider, routes[0].model
            );
        }
        None => {
            console.warn(&format!(
                "No chain entry matches {}; the chain is walked with default models",
                model
            ));
        }
    }
}
