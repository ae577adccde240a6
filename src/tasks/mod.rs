//! Task list management
//!
//! The task list is an ordered sequence of non-empty strings with no other
//! metadata; insertion order is display order is persisted order. Every
//! mutation goes straight to the store, and a failed save rolls the
//! in-memory list back so memory and record never diverge.

pub mod store;

pub use store::TaskStore;

use tracing::warn;

use crate::console::{InputError, LineIo};
use crate::session::input;
use crate::session::messages;

/// Run the task-list sub-menu until the user picks "Back".
///
/// `tasks` is the session's authoritative in-memory list; it is already
/// persisted when this returns.
pub fn run_task_menu(
    io: &mut dyn LineIo,
    store: &TaskStore,
    tasks: &mut Vec<String>,
) -> Result<(), InputError> {
    loop {
        io.write_line(messages::TASK_MENU);
        let choice = input::ask_text(io, messages::CHOOSE, None)?;

        match choice.as_str() {
            "1" => list_tasks(io, tasks),
            "2" => add_task(io, store, tasks)?,
            "3" => remove_task(io, store, tasks)?,
            "4" => return Ok(()),
            _ => io.write_line(messages::UNRECOGNIZED_TASK),
        }
    }
}

fn list_tasks(io: &mut dyn LineIo, tasks: &[String]) {
    if tasks.is_empty() {
        io.write_line(messages::TASKS_EMPTY);
        return;
    }
    io.write_line(messages::TASKS_HEADER);
    for (i, task) in tasks.iter().enumerate() {
        io.write_line(&messages::task_item(i + 1, task));
    }
}

fn add_task(
    io: &mut dyn LineIo,
    store: &TaskStore,
    tasks: &mut Vec<String>,
) -> Result<(), InputError> {
    let task = input::ask_text(io, messages::ASK_TASK, None)?;
    if task.is_empty() {
        io.write_line(messages::TASK_EMPTY_REJECTED);
        return Ok(());
    }

    tasks.push(task);
    match store.save(tasks) {
        Ok(()) => io.write_line(messages::TASK_ADDED),
        Err(e) => {
            warn!("Save after add failed: {:#}", e);
            tasks.pop();
            io.write_line(&messages::could_not_save("addition"));
        }
    }
    Ok(())
}

fn remove_task(
    io: &mut dyn LineIo,
    store: &TaskStore,
    tasks: &mut Vec<String>,
) -> Result<(), InputError> {
    if tasks.is_empty() {
        io.write_line(messages::NOTHING_TO_REMOVE);
        return Ok(());
    }

    let index = input::ask_int(
        io,
        messages::ASK_REMOVE_INDEX,
        Some(1),
        Some(tasks.len() as i64),
    )?;
    let position = (index - 1) as usize;

    let removed = tasks.remove(position);
    match store.save(tasks) {
        Ok(()) => io.write_line(&messages::task_removed(&removed)),
        Err(e) => {
            warn!("Save after remove failed: {:#}", e);
            tasks.insert(position, removed);
            io.write_line(&messages::could_not_save("removal"));
        }
    }
    Ok(())
}
