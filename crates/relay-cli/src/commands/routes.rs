//! Fallback chain listing command

use crate::console::CliConsole;
use colored::*;
use relay_core::{ChainBuilder, ProviderId, RelayConfig};

/// Print the chain that would be built for the given registered providers
pub fn show(config: &RelayConfig, registered: &[ProviderId], verbose: bool) {
    let console = CliConsole::new(verbose);
    console.print_header("Fallback Chain");

    console.info(&format!(
        "Registered providers: {}",
        registered
            .iter()
            .map(ProviderId::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    ));

    let routes = ChainBuilder::plan(config, |id| registered.contains(id));
    if routes.is_empty() {
        console.warn(
            "No fallback providers configured. Set at least one API key or register the proxy.",
        );
        return;
    }

    for (i, route) in routes.iter().enumerate() {
        let role = if i == 0 { "primary" } else { "fallback" };
        println!(
            "  {}. {} {} {}",
            i + 1,
            route.provider.as_str().magenta().bold(),
            route.model.green(),
            format!("({role})").dimmed()
        );
    }

    for provider in ProviderId::FALLBACK_ORDER {
        if registered.contains(&provider) && !config.has_credential(&provider) {
            console.info(&format!("{} skipped: no API key", provider));
        }
    }
}
