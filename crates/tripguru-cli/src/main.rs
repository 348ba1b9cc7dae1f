//! TripGuru CLI Application
//!
//! Command-line interface for the TripGuru trip tracker.

mod args;
mod cli;
mod renderer;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use tripguru_core::{StoreTripRepository, TripStoreBuilder, TripUseCases};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let store = TripStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to open trip database")?;
    info!("Using trip database {}", store.database_path().display());

    let repository = StoreTripRepository::new(Arc::new(store));
    let mut cli = Cli::new(
        TripUseCases::new(Arc::new(repository)),
        TerminalRenderer::new(!no_color),
        json,
    )?;

    match command {
        Some(Show(args)) => cli.show_trip(args).await,
        Some(Add(args)) => cli.add_trip(args).await,
        Some(Edit(args)) => cli.edit_trip(args).await,
        Some(Delete(args)) => cli.delete_trip(args).await,
        Some(List) | None => cli.list_trips().await,
    }
}
