//! Command implementations for the CLI interface.
//!
//! Each handler opens the task file through [`Config`], runs one operation and
//! reports the outcome on stdout. Errors are returned to `main`, which maps them
//! to an exit code.

use std::io;

use anyhow::{Context, Result};
use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::Config;
use crate::db::{Database, LoadSource};
use crate::error::TaskError;
use crate::fields::StatusFilter;
use crate::menu::ConsoleMenu;
use crate::query;
use crate::task::RawTaskInput;
use crate::view::print_table;

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// Short name for the task.
        name: String,
        /// Deadline: YYYY-MM-DD.
        #[arg(long)]
        deadline: String,
        /// Category, e.g. Work or Home.
        #[arg(long)]
        category: String,
        /// Priority: High | Medium | Low.
        #[arg(long, default_value = "Medium")]
        priority: String,
        /// Repeat interval in days (stored only). Non-numeric input counts as 0.
        #[arg(long, default_value = "0")]
        recurring: String,
    },

    /// List tasks.
    List {
        /// Only tasks not yet completed.
        #[arg(long, conflicts_with = "done")]
        pending: bool,
        /// Only completed tasks.
        #[arg(long)]
        done: bool,
    },

    /// Search task names and categories (case-insensitive substring).
    Search {
        /// Text to look for. An empty query lists every task.
        #[arg(default_value = "")]
        query: String,
    },

    /// Show tasks in a category (case-insensitive exact match).
    Filter {
        category: String,
    },

    /// Mark tasks completed, by name or by list position.
    Complete {
        /// Complete the first task with this name.
        #[arg(long, conflicts_with = "positions", required_unless_present = "positions")]
        name: Option<String>,
        /// 1-based list positions. May be repeated.
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        positions: Vec<u64>,
    },

    /// Delete tasks, by name or by list position.
    Delete {
        /// Delete every task with this name.
        #[arg(long, conflicts_with = "position", required_unless_present = "position")]
        name: Option<String>,
        /// 1-based list position.
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        position: Option<u64>,
    },

    /// Launch the interactive numbered menu.
    Menu,

    /// Copy a legacy tasks.json into the current task file format.
    Migrate,

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Open the task file, logging where it was read from.
pub fn open_db(config: &Config) -> Result<Database> {
    let store = config.store();
    let (tasks, source) = store.load_with_source()?;
    match &source {
        LoadSource::Legacy(path) => info!(path = %path.display(), "loaded legacy task file"),
        LoadSource::Missing => debug!(path = %store.path().display(), "no task file yet"),
        LoadSource::Current => {}
    }
    debug!(count = tasks.len(), "tasks loaded");
    Ok(Database::from_loaded(store, tasks, config.date_validation))
}

/// Add a new task from raw field input.
pub fn cmd_add(
    config: &Config,
    name: String,
    deadline: String,
    category: String,
    priority: String,
    recurring: String,
) -> Result<()> {
    let mut db = open_db(config)?;
    let raw = RawTaskInput { name, deadline, category, priority, recurring };
    let pos = db.add(raw.into_new_task())?;
    info!(path = %config.db_path.display(), "task added");
    println!("Added task #{}", pos + 1);
    Ok(())
}

/// List tasks, optionally only pending or only done.
pub fn cmd_list(config: &Config, pending: bool, done: bool) -> Result<()> {
    let db = open_db(config)?;
    let tasks = db.tasks().as_slice();
    let entries = if pending {
        query::filter_by_status(tasks, StatusFilter::Pending)
    } else if done {
        query::filter_by_status(tasks, StatusFilter::Done)
    } else {
        query::all(tasks)
    };
    print_table(&entries);
    Ok(())
}

pub fn cmd_search(config: &Config, text: String) -> Result<()> {
    let db = open_db(config)?;
    let entries = query::search(db.tasks().as_slice(), &text);
    print_table(&entries);
    Ok(())
}

pub fn cmd_filter(config: &Config, category: String) -> Result<()> {
    let db = open_db(config)?;
    let entries = query::filter_by_category(db.tasks().as_slice(), &category);
    print_table(&entries);
    Ok(())
}

/// Mark a task completed by name, or every task at the given positions.
pub fn cmd_complete(config: &Config, name: Option<String>, positions: Vec<u64>) -> Result<()> {
    let mut db = open_db(config)?;
    if let Some(name) = name {
        require_name(&name)?;
        match db.complete_by_name(&name)? {
            Some(idx) => println!("Marked #{} '{}' done.", idx + 1, name),
            None => {
                debug!(%name, "no task to complete");
                println!("No task named '{}'.", name);
            }
        }
        return Ok(());
    }
    let indices = to_indices(&positions);
    db.complete_at(&indices)?;
    println!("Marked {} task(s) done.", indices.len());
    Ok(())
}

/// Delete every task with a name, or the single task at a position.
pub fn cmd_delete(config: &Config, name: Option<String>, position: Option<u64>) -> Result<()> {
    let mut db = open_db(config)?;
    if let Some(name) = name {
        require_name(&name)?;
        let removed = db.delete_by_name(&name)?;
        println!("Deleted {} task(s) named '{}'.", removed, name);
        return Ok(());
    }
    let index = position.map(to_index).context("A task position or --name is required")?;
    let task = db.delete_at(index)?;
    println!("Deleted '{}'.", task.name);
    Ok(())
}

/// Run the console menu on stdin/stdout.
pub fn cmd_menu(config: &Config) -> Result<()> {
    let mut db = open_db(config)?;
    let stdin = io::stdin();
    ConsoleMenu::new(&mut db, stdin.lock(), io::stdout()).run()
}

/// Rewrite the task file, pulling in the legacy file if that is what was loaded.
pub fn cmd_migrate(config: &Config) -> Result<()> {
    let store = config.store();
    let (tasks, source) = store.load_with_source()?;
    match source {
        LoadSource::Current => {
            println!("{} is already current.", store.path().display());
        }
        LoadSource::Missing => {
            println!("Nothing to migrate: neither {} nor {} exists.",
                store.path().display(), config.legacy_path.display());
        }
        LoadSource::Legacy(legacy) => {
            store.save(&tasks)?;
            info!(from = %legacy.display(), to = %store.path().display(), "migrated task file");
            println!("Migrated {} task(s) from {} to {}.",
                tasks.len(), legacy.display(), store.path().display());
        }
    }
    Ok(())
}

pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// Positions arrive 1-based and already range-checked against 0 by clap.
fn to_index(position: u64) -> usize {
    usize::try_from(position.saturating_sub(1)).unwrap_or(usize::MAX)
}

// Repeated positions name the same task once.
fn to_indices(positions: &[u64]) -> Vec<usize> {
    let mut indices: Vec<usize> = positions.iter().copied().map(to_index).collect();
    indices.sort_unstable();
    indices.dedup();
    indices
}

fn require_name(name: &str) -> std::result::Result<(), TaskError> {
    if name.trim().is_empty() {
        Err(TaskError::EmptyName)
    } else {
        Ok(())
    }
}
