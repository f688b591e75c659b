//! Runtime configuration, resolved once from command-line flags and environment.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::db::{TaskStore, LEGACY_TASKS_FILE, TASKS_FILE};
use crate::list::DateValidation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Current task file.
    pub db_path: PathBuf,
    /// File read when `db_path` does not exist yet.
    pub legacy_path: PathBuf,
    pub date_validation: DateValidation,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let db_path = cli.db.clone().unwrap_or_else(|| PathBuf::from(TASKS_FILE));
        let legacy_path = cli
            .legacy_db
            .clone()
            .unwrap_or_else(|| sibling(&db_path, LEGACY_TASKS_FILE));
        let date_validation = if cli.lenient_dates {
            DateValidation::Skip
        } else {
            DateValidation::Enforce
        };
        Config { db_path, legacy_path, date_validation }
    }

    pub fn store(&self) -> TaskStore {
        TaskStore::new(&self.db_path).with_legacy(&self.legacy_path)
    }
}

fn sibling(path: &Path, name: &str) -> PathBuf {
    match path.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}
