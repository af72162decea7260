use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Project and task tracking board
///
/// Tracks projects, their tasks, and the shared resources those tasks need.
/// Run `serve` to host the REST API and the browser front end; the other
/// commands print the derived views to the terminal.
#[derive(Parser)]
#[command(version, about, name = "taskboard")]
pub struct Args {
    /// JSON configuration file. Defaults to ./config.json when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the SQLite database file. Overrides the configuration file;
    /// defaults to $XDG_DATA_HOME/taskboard/taskboard.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, `projects` is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server
    Serve(ServeArgs),
    /// Create the database schema
    InitDb {
        /// Drop all existing data first
        #[arg(long)]
        reset: bool,
    },
    /// Show every project with task statuses and possible completion dates
    #[command(alias = "p")]
    Projects,
    /// Show the job board: actionable tasks per resource
    #[command(alias = "j")]
    Jobs,
    /// List resources
    #[command(alias = "r")]
    Resources,
}

/// Server options; each one overrides the configuration file.
#[derive(clap::Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory with the front end's static files
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}
