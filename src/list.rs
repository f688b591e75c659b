//! The ordered task list and the operations that mutate it.
//!
//! Every operation either succeeds or returns an error having changed nothing.
//! Persistence is the caller's job; see [`crate::db::Database`] for the session
//! type that saves after each successful mutation.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskError};
use crate::task::{NewTask, Task};
use crate::validate::is_valid_date;

/// Whether `add` checks the deadline format.
///
/// `Skip` stores whatever deadline text was typed; older task files contain
/// such entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateValidation {
    #[default]
    Enforce,
    Skip,
}

/// Insertion-ordered tasks. Names need not be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Validate and append a new task, returning its position.
    pub fn add(&mut self, fields: NewTask, validation: DateValidation) -> Result<usize> {
        if fields.name.trim().is_empty() {
            return Err(TaskError::EmptyName);
        }
        if validation == DateValidation::Enforce && !is_valid_date(&fields.deadline) {
            return Err(TaskError::InvalidDate(fields.deadline));
        }
        self.tasks.push(Task::new(fields));
        Ok(self.tasks.len() - 1)
    }

    /// Remove every task whose name matches case-insensitively. Returns how many were removed.
    pub fn delete_by_name(&mut self, name: &str) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.name_matches(name));
        before - self.tasks.len()
    }

    /// Remove exactly the task at `index`.
    pub fn delete_at(&mut self, index: usize) -> Result<Task> {
        self.check_index(index)?;
        Ok(self.tasks.remove(index))
    }

    /// Complete the first task whose name matches. No match is not an error.
    pub fn complete_by_name(&mut self, name: &str) -> Option<usize> {
        let idx = self.tasks.iter().position(|t| t.name_matches(name))?;
        self.tasks[idx].completed = true;
        Some(idx)
    }

    /// Complete every selected position. All positions are checked before any task changes.
    pub fn complete_at(&mut self, indices: &[usize]) -> Result<()> {
        if indices.is_empty() {
            return Err(TaskError::NotFound("No task selected".into()));
        }
        for &index in indices {
            self.check_index(index)?;
        }
        for &index in indices {
            self.tasks[index].completed = true;
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(TaskError::OutOfRange { index, len: self.tasks.len() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Priority;

    fn new_task(name: &str, deadline: &str) -> NewTask {
        NewTask {
            name: name.into(),
            deadline: deadline.into(),
            category: "Home".into(),
            priority: Priority::Medium,
            recurring: 0,
        }
    }

    fn sample() -> TaskList {
        let mut list = TaskList::new();
        for name in ["Groceries", "Laundry", "groceries"] {
            list.add(new_task(name, "2024-06-01"), DateValidation::Enforce).unwrap();
        }
        list
    }

    #[test]
    fn add_appends_and_preserves_order() {
        let mut list = sample();
        let before: Vec<Task> = list.iter().cloned().collect();
        let pos = list.add(new_task("Taxes", "2025-04-15"), DateValidation::Enforce).unwrap();
        assert_eq!(pos, 3);
        assert_eq!(list.get(3).unwrap().name, "Taxes");
        assert!(!list.get(3).unwrap().completed);
        assert_eq!(&list.as_slice()[..3], &before[..]);
    }

    #[test]
    fn add_rejects_invalid_date() {
        let mut list = sample();
        let err = list.add(new_task("Bad", "2024-13-40"), DateValidation::Enforce).unwrap_err();
        assert!(matches!(err, TaskError::InvalidDate(ref d) if d == "2024-13-40"));
        assert_eq!(list, sample());
    }

    #[test]
    fn add_without_validation_stores_raw_deadline() {
        let mut list = TaskList::new();
        list.add(new_task("Someday", "next week"), DateValidation::Skip).unwrap();
        assert_eq!(list.get(0).unwrap().deadline, "next week");
    }

    #[test]
    fn add_rejects_blank_name() {
        let mut list = TaskList::new();
        let err = list.add(new_task("   ", "2024-06-01"), DateValidation::Skip).unwrap_err();
        assert!(matches!(err, TaskError::EmptyName));
        assert!(list.is_empty());
    }

    #[test]
    fn delete_by_name_removes_all_matches() {
        let mut list = sample();
        assert_eq!(list.delete_by_name("GROCERIES"), 2);
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().name, "Laundry");
        assert_eq!(list.delete_by_name("nothing"), 0);
    }

    #[test]
    fn delete_at_removes_one() {
        let mut list = sample();
        let removed = list.delete_at(0).unwrap();
        assert_eq!(removed.name, "Groceries");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).unwrap().name, "groceries");
    }

    #[test]
    fn delete_out_of_bounds() {
        let mut list = sample();
        let err = list.delete_at(99).unwrap_err();
        assert!(matches!(err, TaskError::OutOfRange { index: 99, len: 3 }));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn complete_by_name_hits_first_match_only() {
        let mut list = sample();
        assert_eq!(list.complete_by_name("groceries"), Some(0));
        assert!(list.get(0).unwrap().completed);
        assert!(!list.get(2).unwrap().completed);
    }

    #[test]
    fn complete_by_name_is_idempotent() {
        let mut list = sample();
        list.complete_by_name("Laundry");
        list.complete_by_name("Laundry");
        assert!(list.get(1).unwrap().completed);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn complete_by_name_without_match_is_noop() {
        let mut list = sample();
        assert_eq!(list.complete_by_name("Taxes"), None);
        assert_eq!(list, sample());
    }

    #[test]
    fn complete_at_marks_every_selected() {
        let mut list = sample();
        list.complete_at(&[0, 2]).unwrap();
        let done: Vec<bool> = list.iter().map(|t| t.completed).collect();
        assert_eq!(done, vec![true, false, true]);
    }

    #[test]
    fn complete_at_is_all_or_nothing() {
        let mut list = sample();
        let err = list.complete_at(&[0, 5]).unwrap_err();
        assert!(matches!(err, TaskError::OutOfRange { index: 5, len: 3 }));
        assert!(list.iter().all(|t| !t.completed));
    }

    #[test]
    fn complete_at_requires_selection() {
        let mut list = sample();
        assert!(matches!(list.complete_at(&[]), Err(TaskError::NotFound(_))));
    }
}
