// Terminal rendering of todos and command outcomes

use crate::search::Status;
use crate::todo::Todo;
use colored::Colorize;

/// Multi-line block describing one todo
pub fn todo_block(todo: &Todo) -> String {
    let status = if todo.completed {
        "Completed".green()
    } else {
        "Not completed".red()
    };

    format!(
        "-----------{}------------\n{}{}\n{}{}\n{}{}",
        format!("TODO ID {}", todo.id).cyan(),
        "Title: ".green(),
        todo.title.red(),
        "Description: ".green(),
        todo.description.red(),
        "Status: ".yellow(),
        status,
    )
}

/// Blocks for several todos, one after another
pub fn todo_blocks<'a>(todos: impl IntoIterator<Item = &'a Todo>) -> String {
    todos.into_iter().map(todo_block).collect::<Vec<_>>().join("\n")
}

pub fn created(id: u32) -> String {
    format!("Todo Created Successfully with Id {}", id.to_string().cyan())
        .green()
        .bold()
        .to_string()
}

pub fn removed(id: u32) -> String {
    format!("Todo with id {} removed successfully.", id.to_string().cyan())
        .green()
        .to_string()
}

pub fn toggled(id: u32) -> String {
    format!("Todo with id {} toggled successfully.", id.to_string().cyan())
        .green()
        .to_string()
}

pub fn not_found(id: u32) -> String {
    format!("Todo with id {} Not Found.", id.to_string().cyan())
        .red()
        .to_string()
}

pub fn keyword_not_matched(keyword: &str) -> String {
    format!("Keyword {} not matched with any todo.", keyword).red().to_string()
}

/// Message shown when a status listing comes back empty
pub fn empty_status(status: Status) -> String {
    let msg = match status {
        Status::Remaining => "You are great one, no todos left for you",
        Status::Completed => "You have no completed Todos.",
    };
    msg.red().bold().to_string()
}

pub fn count(n: usize) -> String {
    format!("You have {} todos.", n.to_string().red()).cyan().bold().to_string()
}

/// Warning printed when a change could not be written to disk
pub fn save_warning(err: &eyre::Report) -> String {
    format!("Warning: change not saved: {:#}", err).yellow().to_string()
}
