//! Read-only views over a task list.
//!
//! Results keep the original order and carry each task's position so a caller can
//! address index-based operations from a filtered view.

use crate::fields::StatusFilter;
use crate::task::Task;

/// A task together with its position in the source list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub index: usize,
    pub task: &'a Task,
}

/// Every task, as entries.
pub fn all(tasks: &[Task]) -> Vec<Entry<'_>> {
    select(tasks, |_| true)
}

/// Tasks whose name or category contains `query`, ignoring case. An empty query matches all.
pub fn search<'a>(tasks: &'a [Task], query: &str) -> Vec<Entry<'a>> {
    let query = query.to_lowercase();
    select(tasks, |t| {
        t.name.to_lowercase().contains(&query) || t.category.to_lowercase().contains(&query)
    })
}

/// Tasks whose category equals `category`, ignoring case.
pub fn filter_by_category<'a>(tasks: &'a [Task], category: &str) -> Vec<Entry<'a>> {
    let category = category.to_lowercase();
    select(tasks, |t| t.category.to_lowercase() == category)
}

/// Tasks in the given completion state.
pub fn filter_by_status(tasks: &[Task], status: StatusFilter) -> Vec<Entry<'_>> {
    select(tasks, |t| status.matches(t.completed))
}

fn select<F>(tasks: &[Task], keep: F) -> Vec<Entry<'_>>
where
    F: Fn(&Task) -> bool,
{
    tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| keep(t))
        .map(|(index, task)| Entry { index, task })
        .collect()
}
