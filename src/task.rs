//! Task data structure and related functionality.
//!
//! This module defines the core `Task` struct, the typed `NewTask` used to build
//! one, and `RawTaskInput`, the adapter that turns untyped form input into a
//! `NewTask`.

use serde::{Deserialize, Serialize};

use crate::fields::Priority;

/// A single to-do item.
///
/// `recurring` is a day count that is stored and displayed but never acted upon.
/// Files written before it existed load with `recurring = 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub deadline: String,
    pub category: String,
    pub priority: Priority,
    pub completed: bool,
    #[serde(default)]
    pub recurring: u32,
}

impl Task {
    /// Build a fresh, incomplete task.
    pub fn new(fields: NewTask) -> Self {
        Task {
            name: fields.name,
            deadline: fields.deadline,
            category: fields.category,
            priority: fields.priority,
            completed: false,
            recurring: fields.recurring,
        }
    }

    /// Case-insensitive name comparison used by name-based lookups.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Typed fields for a task that has not been added yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub name: String,
    pub deadline: String,
    pub category: String,
    pub priority: Priority,
    pub recurring: u32,
}

/// Raw strings as collected by a form or prompt.
#[derive(Debug, Clone, Default)]
pub struct RawTaskInput {
    pub name: String,
    pub deadline: String,
    pub category: String,
    pub priority: String,
    pub recurring: String,
}

impl RawTaskInput {
    /// Trim every field, parse the priority and coerce the recurrence interval.
    pub fn into_new_task(self) -> NewTask {
        NewTask {
            name: self.name.trim().to_string(),
            deadline: self.deadline.trim().to_string(),
            category: self.category.trim().to_string(),
            priority: Priority::parse(&self.priority),
            recurring: coerce_recurring(&self.recurring),
        }
    }
}

/// Digits-only input within `u32` becomes the interval; anything else is 0.
pub fn coerce_recurring(s: &str) -> u32 {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    s.parse().unwrap_or(0)
}
