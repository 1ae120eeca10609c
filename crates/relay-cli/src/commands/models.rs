//! Models listing command

use crate::console::CliConsole;
use colored::*;
use relay_core::catalog::ModelCatalog;
use relay_core::error::RelayResult;
use relay_core::RelayConfig;

/// List requestable models
pub async fn list(config: RelayConfig, json: bool) -> RelayResult<()> {
    let models = ModelCatalog::new(config).list().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    let console = CliConsole::new(true);
    console.print_header("Available Models");

    let mut current = "";
    for model in &models {
        if model.provider != current {
            current = &model.provider;
            println!("\n{}", current.magenta().bold());
        }
        println!(
            "  • {} {}",
            model.name.green(),
            format!("({}, {} tokens)", model.title, model.context_window).dimmed()
        );
    }

    console.info(&format!("\n{} model(s) listed", models.len()));
    Ok(())
}
