// Search criteria for todos

use crate::todo::Todo;
use serde::{Deserialize, Serialize};

/// Completion status used by [`Search::Status`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Completed,
    Remaining,
}

impl Status {
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Status::Completed => todo.completed,
            Status::Remaining => !todo.completed,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Completed => write!(f, "completed"),
            Status::Remaining => write!(f, "remaining"),
        }
    }
}

/// What to look for when searching the collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Search {
    /// Exact id
    Id(u32),
    /// Case-sensitive substring of the title
    Keyword(String),
    /// Every todo in the given state
    Status(Status),
}

impl Search {
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Search::Id(id) => todo.id == *id,
            Search::Keyword(text) => todo.title.contains(text.as_str()),
            Search::Status(status) => status.matches(todo),
        }
    }

    /// Whether the search stops at the first matching todo
    pub fn is_first_match(&self) -> bool {
        !matches!(self, Search::Status(_))
    }
}

impl std::fmt::Display for Search {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Search::Id(id) => write!(f, "id = {}", id),
            Search::Keyword(text) => write!(f, "title contains {:?}", text),
            Search::Status(status) => write!(f, "status = {}", status),
        }
    }
}
