use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Simple, file-backed personal task tracker.
/// Storage defaults to ./tasks_v2.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "todo", version, about = "Personal task tracking CLI")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, global = true, env = "TODO_DB")]
    pub db: Option<PathBuf>,

    /// Legacy task file read when the task file does not exist yet.
    /// Defaults to tasks.json beside the task file.
    #[arg(long, global = true)]
    pub legacy_db: Option<PathBuf>,

    /// Accept deadlines that are not YYYY-MM-DD.
    #[arg(long, global = true, env = "TODO_LENIENT_DATES")]
    pub lenient_dates: bool,

    #[command(subcommand)]
    pub command: Commands,
}
