//! Error types for task operations.
//!
//! Exit codes:
//! - 1: Anything not covered below (bad environment, terminal I/O)
//! - 2: User error (invalid deadline, empty name, nothing selected, bad position)
//! - 4: Persistence failed (task file unreadable, unparsable or unwritable)

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for the `todo` binary.
pub mod exit_codes {
    pub const GENERAL: i32 = 1;
    pub const USER_ERROR: i32 = 2;
    pub const PERSISTENCE_FAILED: i32 = 4;
}

/// Failure reading or writing the backing store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a valid task file: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize tasks: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a task operation. The task list is left untouched whenever one is returned.
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Invalid deadline '{0}'. Use YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("Task name must not be empty")]
    EmptyName,

    #[error("{0}")]
    NotFound(String),

    #[error("No task at position {} (list has {len} task(s))", .index + 1)]
    OutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Persistence(#[from] StoreError),
}

impl TaskError {
    pub fn exit_code(&self) -> i32 {
        match self {
            TaskError::InvalidDate(_)
            | TaskError::EmptyName
            | TaskError::NotFound(_)
            | TaskError::OutOfRange { .. } => exit_codes::USER_ERROR,
            TaskError::Persistence(_) => exit_codes::PERSISTENCE_FAILED,
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
