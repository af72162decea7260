//! Taskboard CLI Application
//!
//! Hosts the REST API for the browser front end and prints the project
//! overview and job board to the terminal.

mod args;
mod cli;
mod config;
mod http;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use config::AppConfig;
use log::info;
use renderer::TerminalRenderer;
use taskboard_core::TrackerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        database_file,
        no_color,
        command,
    } = Args::parse();

    let mut app_config = AppConfig::load(config.as_deref())?;
    if database_file.is_some() {
        app_config.database.name = database_file;
    }

    let tracker = TrackerBuilder::new()
        .with_database_path(app_config.database.name.as_ref())
        .build()
        .await
        .context("Failed to initialize tracker")?;

    info!("Taskboard started");

    match command {
        Some(Serve(args)) => {
            let mut server = app_config.server;
            server.apply(args);
            http::serve(tracker, &server).await
        }
        Some(InitDb { reset }) => {
            Cli::new(tracker, TerminalRenderer::new(!no_color))
                .init_db(reset)
                .await
        }
        Some(Jobs) => {
            Cli::new(tracker, TerminalRenderer::new(!no_color))
                .show_jobs()
                .await
        }
        Some(Resources) => {
            Cli::new(tracker, TerminalRenderer::new(!no_color))
                .list_resources()
                .await
        }
        Some(Projects) | None => {
            Cli::new(tracker, TerminalRenderer::new(!no_color))
                .list_projects()
                .await
        }
    }
}
