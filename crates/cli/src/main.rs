//! Replays scripted events through the reference host and prints the
//! commands the auto-tool engine emits.
mod scenario;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use autotool_content::{Catalog, CatalogLoader, SettingsLoader, SettingsSpec};
use autotool_core::{InventoryOracle, ToolCommand};
use autotool_host::AutoToolHost;
use clap::Parser;
use console::style;
use scenario::{Input, Scenario, expand};

/// Replay an auto-tool scenario
#[derive(Parser)]
#[command(name = "autotool")]
#[command(about = "Replay tool-selection scenarios", long_about = None)]
#[command(version)]
struct Cli {
    /// Item and block catalog (RON); defaults to the built-in catalog
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Auto-tool settings (TOML); defaults resolved against the catalog
    #[arg(short, long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Scenario to replay (RON)
    #[arg(long, value_name = "FILE")]
    scenario: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One human-readable line per command
    Text,
    /// One JSON object per command
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => CatalogLoader::load(path)?,
        None => Catalog::builtin(),
    };
    let config = match &cli.settings {
        Some(path) => SettingsLoader::load(path, &catalog)?,
        None => SettingsSpec::default().resolve(&catalog)?,
    };
    tracing::info!(
        items = catalog.items.len(),
        blocks = catalog.blocks.len(),
        prefer = %config.prefer,
        switch_delay = config.switch_delay,
        "catalog and settings loaded"
    );

    let scenario = Scenario::load(&cli.scenario)?;
    let mut host = AutoToolHost::new(Arc::new(catalog), config)?;
    scenario.install(&mut host)?;

    for (step, input) in expand(&scenario.script).enumerate() {
        match input {
            Input::Event(event) => {
                let commands = host
                    .handle(event)
                    .with_context(|| format!("step {} ({:?})", step, event))?;
                for command in commands {
                    print_command(cli.format, step, &command)?;
                }
            }
            Input::BulkMining(active) => host.set_bulk_mining(active),
            Input::Select(slot) => host.inventory_mut().select(slot),
        }
    }

    let held = host.inventory().main_hand();
    let held_name = host
        .catalog()
        .item(held.item)
        .map_or("empty", |item| item.name.as_str());
    tracing::info!(
        selected = %host.inventory().selected(),
        held = held_name,
        commands = host.command_log().len(),
        "scenario finished"
    );

    Ok(())
}

fn print_command(format: OutputFormat, step: usize, command: &ToolCommand) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let detail = match command {
                ToolCommand::SwapToSlot {
                    slot,
                    restore_after,
                } => format!(
                    " -> {}{}",
                    slot,
                    if *restore_after { " (restore on release)" } else { "" }
                ),
                _ => String::new(),
            };
            println!(
                "{} {}{}",
                style(format!("[{:>3}]", step)).dim(),
                style(command.as_str()).cyan().bold(),
                detail
            );
        }
        OutputFormat::Json => {
            let line = serde_json::json!({ "step": step, "command": command });
            println!("{}", serde_json::to_string(&line)?);
        }
    }
    Ok(())
}
