//! Interactive menu for the in-memory task tracker.
//!
//! Presents a numbered menu on stdout and reads choices from stdin:
//!
//! ```text
//! Task Manager Menu:
//! 1. Add task
//! 2. List tasks
//! 3. Mark task as completed
//! 4. Delete task
//! 5. Exit
//! ```
//!
//! All task state lives in a [`TaskStore`] owned by the loop; nothing is
//! persisted. Store failures are rendered as messages and never terminate
//! the session. The loop is generic over its reader and writer so sessions
//! can be scripted in tests.

use std::io;
use std::io::{BufRead, Write};

use chrono::NaiveDate;
use taskdeck::task::domain::{CreateTaskRequest, Task, TaskId};
use taskdeck::task::store::{TaskStore, TaskStoreError};

/// The single calendar format accepted for due dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut stdin.lock(), &mut stdout.lock())
}

/// Runs the menu loop until exit or end of input.
fn run(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
    let mut store = TaskStore::new();

    loop {
        print_menu(output)?;
        let Some(choice) = prompt(input, output, "\nEnter your choice (1-5): ")? else {
            break;
        };

        match choice.trim() {
            "1" => add_task(&mut store, input, output)?,
            "2" => list_tasks(&store, output)?,
            "3" => mark_completed(&mut store, input, output)?,
            "4" => delete_task(&mut store, input, output)?,
            "5" => {
                writeln!(output, "Goodbye!")?;
                break;
            }
            _ => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }

    Ok(())
}

/// Writes the main menu options.
fn print_menu(output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "\nTask Manager Menu:")?;
    writeln!(output, "1. Add task")?;
    writeln!(output, "2. List tasks")?;
    writeln!(output, "3. Mark task as completed")?;
    writeln!(output, "4. Delete task")?;
    writeln!(output, "5. Exit")
}

/// Writes `message` and reads one line, without its line ending.
///
/// Returns `Ok(None)` at end of input.
fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Writes a task's details in the list format.
fn render_task(output: &mut impl Write, task: &Task) -> io::Result<()> {
    let status = if task.completed() { "✓" } else { " " };
    let due_date = task
        .due_date()
        .map_or_else(|| "No due date".to_owned(), |date| date.to_string());

    writeln!(output, "[{status}] Task {}: {}", task.id(), task.title())?;
    writeln!(output, "    Description: {}", task.description())?;
    writeln!(output, "    Due date: {due_date}")?;
    writeln!(output)
}

/// Parses a due date in the fixed `YYYY-MM-DD` format.
///
/// Empty or unparsable input yields `None`; the caller decides whether that
/// deserves a warning.
fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    if raw.trim().is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Parses a task id typed by the user.
fn parse_task_id(raw: &str) -> Option<TaskId> {
    raw.trim().parse::<u64>().ok().map(TaskId::from_u64)
}

/// Handles the "add task" menu entry.
fn add_task(
    store: &mut TaskStore,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let Some(title) = prompt(input, output, "Enter task title: ")? else {
        return Ok(());
    };
    let Some(description) = prompt(input, output, "Enter task description: ")? else {
        return Ok(());
    };
    let Some(due_date_raw) = prompt(
        input,
        output,
        "Enter due date (YYYY-MM-DD) or press Enter for no due date: ",
    )?
    else {
        return Ok(());
    };

    let due_date = parse_due_date(&due_date_raw);
    if !due_date_raw.trim().is_empty() && due_date.is_none() {
        writeln!(
            output,
            "Invalid date format. Task will be created without due date."
        )?;
    }

    let request = CreateTaskRequest::new(title, description).with_optional_due_date(due_date);
    match store.create(request) {
        Ok(task) => {
            writeln!(output, "\nTask created successfully!")?;
            render_task(output, &task)
        }
        Err(error) => writeln!(output, "Could not create task: {error}"),
    }
}

/// Handles the "list tasks" menu entry.
fn list_tasks(store: &TaskStore, output: &mut impl Write) -> io::Result<()> {
    let tasks = store.list(true);
    if tasks.is_empty() {
        writeln!(output, "\nNo tasks found.")
    } else {
        writeln!(output, "\nTask List:")?;
        for task in &tasks {
            render_task(output, task)?;
        }
        Ok(())
    }
}

/// Handles the "mark task as completed" menu entry.
fn mark_completed(
    store: &mut TaskStore,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let Some(raw) = prompt(input, output, "Enter task ID to mark as completed: ")? else {
        return Ok(());
    };
    let Some(id) = parse_task_id(&raw) else {
        return writeln!(output, "Invalid task ID.");
    };

    match store.mark_completed(id) {
        Ok(_) => writeln!(output, "Task marked as completed!"),
        Err(TaskStoreError::NotFound(_)) => writeln!(output, "Task not found."),
        Err(error) => writeln!(output, "Could not mark task as completed: {error}"),
    }
}

/// Handles the "delete task" menu entry.
fn delete_task(
    store: &mut TaskStore,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let Some(raw) = prompt(input, output, "Enter task ID to delete: ")? else {
        return Ok(());
    };
    let Some(id) = parse_task_id(&raw) else {
        return writeln!(output, "Invalid task ID.");
    };

    match store.delete(id) {
        Ok(()) => writeln!(output, "Task deleted successfully!"),
        Err(TaskStoreError::NotFound(_)) => writeln!(output, "Task not found."),
        Err(error) => writeln!(output, "Could not delete task: {error}"),
    }
}
