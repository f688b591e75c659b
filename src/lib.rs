//! # tasktrack - personal task tracking
//!
//! A small, file-backed task list. Tasks carry a name, a deadline, a category, a
//! priority, a completion flag and a recurrence interval in days.
//!
//! ## Key Features
//!
//! - **Single JSON file**: the whole list is rewritten atomically after every change
//! - **Search and filter**: substring search over names and categories, exact
//!   category filter, pending/done views
//! - **Two ways to address tasks**: by name (case-insensitive) or by list position
//! - **Console menu**: numbered 1–5 menu for quick interactive use
//! - **Legacy files**: an older `tasks.json` without recurrence is read and migrated
//!
//! ## Quick Start
//!
//! ```bash
//! # Add a task
//! todo add "Groceries" --deadline 2024-06-01 --category Home --priority High
//!
//! # List, search, filter
//! todo list --pending
//! todo search gro
//! todo filter home
//!
//! # Complete and delete
//! todo complete --name groceries
//! todo delete 2
//!
//! # Interactive menu
//! todo menu
//! ```
//!
//! Data is stored in `./tasks_v2.json` unless `--db` or `TODO_DB` says otherwise.
//!
//! ## Library use
//!
//! ```no_run
//! use tasktrack::db::{Database, TaskStore};
//! use tasktrack::list::DateValidation;
//! use tasktrack::task::RawTaskInput;
//!
//! let mut db = Database::open(TaskStore::new("tasks_v2.json"), DateValidation::Enforce)?;
//! db.add(RawTaskInput {
//!     name: "Groceries".into(),
//!     deadline: "2024-06-01".into(),
//!     category: "Home".into(),
//!     priority: "High".into(),
//!     recurring: "7".into(),
//! }.into_new_task())?;
//! db.complete_by_name("groceries")?;
//! # Ok::<(), tasktrack::error::TaskError>(())
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod db;
pub mod error;
pub mod fields;
pub mod list;
pub mod menu;
pub mod query;
pub mod task;
pub mod validate;
pub mod view;
