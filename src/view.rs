//! Plain-text rendering of task lists.

use chrono::{Local, NaiveDate};

use crate::query::Entry;
use crate::validate::parse_deadline;

/// Completion marker shown in listings.
pub fn format_completed(completed: bool) -> &'static str {
    if completed {
        "✓"
    } else {
        "✗"
    }
}

/// Format a deadline relative to today ("today", "tomorrow", "in 3d", "2d late").
/// Deadlines that are not valid dates render as "-".
pub fn format_due_relative(deadline: &str, today: NaiveDate) -> String {
    match parse_deadline(deadline) {
        None => "-".into(),
        Some(d) => {
            let days = (d - today).num_days();
            if days == 0 {
                "today".into()
            } else if days == 1 {
                "tomorrow".into()
            } else if days > 1 {
                format!("in {days}d")
            } else {
                format!("{}d late", -days)
            }
        }
    }
}

/// Render entries as a table. Positions are shown 1-based.
pub fn render_table(entries: &[Entry<'_>], today: NaiveDate) -> String {
    let mut out = format!(
        "{:<4} {:<4} {:<8} {:<10} {:<9} {:<14} {}\n",
        "#", "Done", "Priority", "Deadline", "Due", "Category", "Name"
    );
    for e in entries {
        let t = e.task;
        out.push_str(&format!(
            "{:<4} {:<4} {:<8} {:<10} {:<9} {:<14} {}\n",
            e.index + 1,
            format_completed(t.completed),
            truncate(t.priority.label(), 8),
            truncate(&t.deadline, 10),
            format_due_relative(&t.deadline, today),
            truncate(&t.category, 14),
            t.name
        ));
    }
    out
}

/// Print entries to stdout, or a short notice when there are none.
pub fn print_table(entries: &[Entry<'_>]) {
    if entries.is_empty() {
        println!("No tasks.");
        return;
    }
    print!("{}", render_table(entries, Local::now().date_naive()));
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}
