//! Numbered console menu for working through a task list interactively.
//!
//! The menu reads from any `BufRead` and writes to any `Write`, so it can be
//! driven from a terminal or from a test. Choices are 1 (add), 2 (view),
//! 3 (complete), 4 (delete) and 5 (save and exit). End of input counts as 5.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::db::Database;
use crate::error::TaskError;
use crate::query;
use crate::task::RawTaskInput;
use crate::view::render_table;

const MENU: &str = "\
Task Tracker
1. Add task
2. View tasks
3. Complete task
4. Delete task
5. Exit
";

enum Flow {
    Continue,
    Exit,
}

pub struct ConsoleMenu<'a, R, W> {
    db: &'a mut Database,
    input: R,
    output: W,
    today: NaiveDate,
}

impl<'a, R: BufRead, W: Write> ConsoleMenu<'a, R, W> {
    pub fn new(db: &'a mut Database, input: R, output: W) -> Self {
        ConsoleMenu { db, input, output, today: Local::now().date_naive() }
    }

    /// Fix the date used for relative deadlines.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Run until the user exits or input ends, then save.
    pub fn run(mut self) -> Result<()> {
        loop {
            write!(self.output, "\n{MENU}")?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };
            let flow = match choice.as_str() {
                "1" => self.add()?,
                "2" => self.view()?,
                "3" => self.complete()?,
                "4" => self.delete()?,
                "5" => Flow::Exit,
                other => {
                    debug!(choice = other, "invalid menu choice");
                    writeln!(self.output, "Invalid choice. Please enter a number from 1 to 5.")?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                break;
            }
        }
        self.db.save()?;
        writeln!(self.output, "Tasks saved. Goodbye!")?;
        Ok(())
    }

    fn add(&mut self) -> Result<Flow> {
        let mut raw = RawTaskInput::default();
        let fields: [(&str, &mut String); 5] = [
            ("Task name: ", &mut raw.name),
            ("Deadline (YYYY-MM-DD): ", &mut raw.deadline),
            ("Category: ", &mut raw.category),
            ("Priority (High/Medium/Low): ", &mut raw.priority),
            ("Recurring (days, 0 for none): ", &mut raw.recurring),
        ];
        for (label, slot) in fields {
            match prompt(&mut self.input, &mut self.output, label)? {
                Some(value) => *slot = value,
                None => return Ok(Flow::Exit),
            }
        }
        match self.db.add(raw.into_new_task()) {
            Ok(pos) => writeln!(self.output, "Task added as #{}.", pos + 1)?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn view(&mut self) -> Result<Flow> {
        self.show_tasks()?;
        Ok(Flow::Continue)
    }

    fn complete(&mut self) -> Result<Flow> {
        let Some(index) = self.select("Task number to complete: ")? else {
            return Ok(Flow::Continue);
        };
        match self.db.complete_at(&[index]) {
            Ok(()) => writeln!(self.output, "Task #{} marked as completed.", index + 1)?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let Some(index) = self.select("Task number to delete: ")? else {
            return Ok(Flow::Continue);
        };
        match self.db.delete_at(index) {
            Ok(task) => writeln!(self.output, "Deleted '{}'.", task.name)?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    /// Show the list and read a 1-based task number, returned 0-based.
    fn select(&mut self, label: &str) -> Result<Option<usize>> {
        if self.db.tasks().is_empty() {
            writeln!(self.output, "No tasks.")?;
            return Ok(None);
        }
        self.show_tasks()?;
        let Some(answer) = self.prompt(label)? else {
            return Ok(None);
        };
        match answer.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(Some(n - 1)),
            _ => {
                writeln!(self.output, "Invalid task number.")?;
                Ok(None)
            }
        }
    }

    fn show_tasks(&mut self) -> io::Result<()> {
        let entries = query::all(self.db.tasks().as_slice());
        if entries.is_empty() {
            writeln!(self.output, "No tasks.")
        } else {
            write!(self.output, "{}", render_table(&entries, self.today))
        }
    }

    fn report(&mut self, err: TaskError) -> io::Result<()> {
        warn!(error = %err, "menu operation rejected");
        writeln!(self.output, "Error: {err}")
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        prompt(&mut self.input, &mut self.output, label)
    }
}

/// Print `label` and read one trimmed line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{TaskStore, TASKS_FILE};
    use crate::list::DateValidation;

    fn run_script(db: &mut Database, script: &str) -> String {
        let mut out = Vec::new();
        ConsoleMenu::new(db, script.as_bytes(), &mut out)
            .with_today(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .run()
            .expect("menu runs");
        String::from_utf8(out).unwrap()
    }

    fn open(dir: &tempfile::TempDir, validation: DateValidation) -> (TaskStore, Database) {
        let store = TaskStore::new(dir.path().join(TASKS_FILE));
        let db = Database::open(store.clone(), validation).unwrap();
        (store, db)
    }

    #[test]
    fn add_view_complete_delete_then_exit() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (store, mut db) = open(&dir, DateValidation::Enforce);
        let script = "1\nLaundry\n2024-06-02\nHome\nhigh\n7\n\
                      1\nTaxes\n2024-06-30\nAdmin\nLow\nx\n\
                      2\n3\n1\n4\n2\n5\n";
        let out = run_script(&mut db, script);

        assert!(out.contains("Task added as #1."));
        assert!(out.contains("Task added as #2."));
        assert!(out.contains("Task #1 marked as completed."));
        assert!(out.contains("Deleted 'Taxes'."));
        assert!(out.ends_with("Tasks saved. Goodbye!\n"));

        let saved = store.load().unwrap();
        assert_eq!(saved.len(), 1);
        let t = saved.get(0).unwrap();
        assert_eq!(t.name, "Laundry");
        assert!(t.completed);
        assert_eq!(t.recurring, 7);
        assert_eq!(t.priority.label(), "High");
    }

    #[test]
    fn invalid_choice_is_reported_and_reprompted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (_, mut db) = open(&dir, DateValidation::Enforce);
        let out = run_script(&mut db, "9\nabc\n5\n");
        assert_eq!(out.matches("Invalid choice").count(), 2);
        assert_eq!(out.matches("Choose an option: ").count(), 3);
    }

    #[test]
    fn enforced_validation_rejects_bad_deadline() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (_, mut db) = open(&dir, DateValidation::Enforce);
        let out = run_script(&mut db, "1\nBad\n2024-13-40\nHome\nLow\n0\n5\n");
        assert!(out.contains("Error: Invalid deadline '2024-13-40'"));
        assert!(db.tasks().is_empty());
    }

    #[test]
    fn lenient_menu_keeps_raw_deadline() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (_, mut db) = open(&dir, DateValidation::Skip);
        run_script(&mut db, "1\nSomeday\nnext week\nMisc\nwhenever\n\n5\n");
        let t = db.tasks().get(0).unwrap();
        assert_eq!(t.deadline, "next week");
        assert_eq!(t.priority.label(), "whenever");
    }

    #[test]
    fn bad_task_numbers_leave_list_alone() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (_, mut db) = open(&dir, DateValidation::Enforce);
        let out = run_script(&mut db, "1\nLaundry\n2024-06-02\nHome\nLow\n0\n4\n0\n4\n9\n3\nfoo\n5\n");
        assert!(out.contains("Invalid task number."));
        assert!(out.contains("Error: No task at position 9 (list has 1 task(s))"));
        assert_eq!(db.tasks().len(), 1);
        assert!(!db.tasks().get(0).unwrap().completed);
    }

    #[test]
    fn end_of_input_saves_and_exits() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (store, mut db) = open(&dir, DateValidation::Enforce);
        let out = run_script(&mut db, "2\n");
        assert!(out.contains("No tasks."));
        assert!(out.ends_with("Tasks saved. Goodbye!\n"));
        assert!(store.path().exists());
    }
}
