//! Task file storage and the editing session built on top of it.
//!
//! `TaskStore` is the persistence boundary: it reads and atomically rewrites the
//! task file and knows how to fall back to the legacy file. `Database` owns the
//! loaded `TaskList` and saves after every successful mutation.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tempfile::NamedTempFile;

use crate::error::{Result, StoreError, TaskError};
use crate::list::{DateValidation, TaskList};
use crate::task::{NewTask, Task};

/// File name of the current task file.
pub const TASKS_FILE: &str = "tasks_v2.json";
/// File name used before `recurring` was stored.
pub const LEGACY_TASKS_FILE: &str = "tasks.json";

/// Where the task list lives on disk.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
    legacy_path: Option<PathBuf>,
}

/// Where a load actually read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    Current,
    Legacy(PathBuf),
    Missing,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TaskStore { path: path.into(), legacy_path: None }
    }

    /// Read from `legacy` whenever the current file does not exist yet.
    pub fn with_legacy(mut self, legacy: impl Into<PathBuf>) -> Self {
        let legacy = legacy.into();
        if legacy != self.path {
            self.legacy_path = Some(legacy);
        }
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task list. A missing file is an empty list, not an error.
    pub fn load(&self) -> std::result::Result<TaskList, StoreError> {
        self.load_with_source().map(|(tasks, _)| tasks)
    }

    /// Load the task list and report which file it came from.
    pub fn load_with_source(&self) -> std::result::Result<(TaskList, LoadSource), StoreError> {
        if let Some(tasks) = read_tasks(&self.path)? {
            return Ok((tasks, LoadSource::Current));
        }
        if let Some(legacy) = &self.legacy_path {
            if let Some(tasks) = read_tasks(legacy)? {
                return Ok((tasks, LoadSource::Legacy(legacy.clone())));
            }
        }
        Ok((TaskList::new(), LoadSource::Missing))
    }

    /// Replace the file contents with `tasks` using an atomic write (temp file + rename).
    pub fn save(&self, tasks: &TaskList) -> std::result::Result<(), StoreError> {
        let data = to_pretty_json(tasks)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let write_err = |source: std::io::Error| StoreError::Write { path: self.path.clone(), source };

        fs::create_dir_all(&dir).map_err(write_err)?;
        let mut tmp = NamedTempFile::new_in(&dir).map_err(write_err)?;
        tmp.write_all(&data).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

fn read_tasks(path: &Path) -> std::result::Result<Option<TaskList>, StoreError> {
    let buf = match fs::read_to_string(path) {
        Ok(buf) => buf,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(StoreError::Read { path: path.to_path_buf(), source }),
    };
    serde_json::from_str(&buf)
        .map(Some)
        .map_err(|source| StoreError::Parse { path: path.to_path_buf(), source })
}

// Four-space indentation, as the file has always been written.
fn to_pretty_json(tasks: &TaskList) -> std::result::Result<Vec<u8>, StoreError> {
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    tasks.serialize(&mut ser).map_err(StoreError::Serialize)?;
    out.push(b'\n');
    Ok(out)
}

/// An open task list bound to its store.
///
/// Mutations go through here so that every success is persisted and every
/// failure, including a failed save, leaves the in-memory list as it was.
#[derive(Debug)]
pub struct Database {
    store: TaskStore,
    tasks: TaskList,
    validation: DateValidation,
}

impl Database {
    /// Load the list from `store`.
    pub fn open(store: TaskStore, validation: DateValidation) -> Result<Self> {
        let tasks = store.load()?;
        Ok(Database { store, tasks, validation })
    }

    /// Wrap a list the caller already loaded from `store`.
    pub fn from_loaded(store: TaskStore, tasks: TaskList, validation: DateValidation) -> Self {
        Database { store, tasks, validation }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Write the current list out unchanged.
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.tasks)?;
        Ok(())
    }

    pub fn add(&mut self, fields: NewTask) -> Result<usize> {
        let validation = self.validation;
        self.commit(|tasks| tasks.add(fields, validation))
    }

    pub fn delete_by_name(&mut self, name: &str) -> Result<usize> {
        self.commit(|tasks| Ok(tasks.delete_by_name(name)))
    }

    pub fn delete_at(&mut self, index: usize) -> Result<Task> {
        self.commit(|tasks| tasks.delete_at(index))
    }

    pub fn complete_by_name(&mut self, name: &str) -> Result<Option<usize>> {
        self.commit(|tasks| Ok(tasks.complete_by_name(name)))
    }

    pub fn complete_at(&mut self, indices: &[usize]) -> Result<()> {
        self.commit(|tasks| tasks.complete_at(indices))
    }

    fn commit<T, F>(&mut self, op: F) -> Result<T>
    where
        F: FnOnce(&mut TaskList) -> Result<T>,
    {
        let snapshot = self.tasks.clone();
        let out = op(&mut self.tasks)?;
        if let Err(e) = self.store.save(&self.tasks) {
            self.tasks = snapshot;
            return Err(TaskError::Persistence(e));
        }
        Ok(out)
    }
}
