// In-memory todo collection mirrored to a single JSON file

use crate::json_file;
use crate::search::{Search, Status};
use crate::todo::{IdStrategy, Todo};
use eyre::{Context, Report, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Result of a mutation together with the outcome of the save that followed it
///
/// The in-memory change is kept even when saving failed.
#[derive(Debug)]
pub struct Persisted<T> {
    /// What the operation produced (new id, or whether a todo matched)
    pub value: T,
    /// Set when writing the backing file failed
    pub error: Option<Report>,
}

impl<T> Persisted<T> {
    fn unchanged(value: T) -> Self {
        Self { value, error: None }
    }

    pub fn is_saved(&self) -> bool {
        self.error.is_none()
    }

    /// Turn a failed save into an error, dropping the value
    pub fn into_result(self) -> Result<T> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.value),
        }
    }
}

/// Todo collection backed by a JSON file
///
/// The whole collection lives in memory. Every successful mutation rewrites
/// the whole file.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    todos: Vec<Todo>,
    id_strategy: IdStrategy,
}

impl Store {
    /// Open the store backed by `path` using sequential ids
    ///
    /// The file is loaded right away; see [`Store::load`].
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::open_with(path, IdStrategy::default())
    }

    /// Open the store backed by `path` with an explicit id strategy
    pub fn open_with<P: AsRef<Path>>(path: P, id_strategy: IdStrategy) -> Self {
        let mut store = Self {
            path: path.as_ref().to_path_buf(),
            todos: Vec::new(),
            id_strategy,
        };
        store.load();
        store
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Replace the in-memory collection with the contents of the backing file
    ///
    /// A missing, unreadable or corrupt file leaves the collection empty.
    pub fn load(&mut self) {
        self.todos = json_file::read_json_array(&self.path);
        info!(file = ?self.path, count = self.todos.len(), "Loaded todos");
    }

    /// Overwrite the backing file with the full collection
    pub fn save(&self) -> Result<()> {
        json_file::write_json_array(&self.path, &self.todos)
            .wrap_err_with(|| format!("Failed to save todos to {}", self.path.display()))
    }

    fn persist<T>(&self, value: T) -> Persisted<T> {
        let error = self.save().err();
        if let Some(e) = &error {
            warn!(file = ?self.path, error = %e, "Todo changes kept in memory only");
        }
        Persisted { value, error }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a new todo and save
    ///
    /// Returns the id of the new todo. Errors only when no id can be
    /// allocated, in which case nothing is changed.
    pub fn create(&mut self, title: impl Into<String>, description: impl Into<String>) -> Result<Persisted<u32>> {
        let id = self
            .id_strategy
            .next_id(&self.todos)
            .context("Failed to allocate todo id")?;

        self.todos.push(Todo::new(id, title, description));
        debug!(id, strategy = %self.id_strategy, "Created todo");

        Ok(self.persist(id))
    }

    /// Remove the first todo with `id`
    ///
    /// `value` is false when no todo matched; the file is not touched then.
    pub fn remove(&mut self, id: u32) -> Persisted<bool> {
        match self.position(id) {
            Some(index) => {
                self.todos.remove(index);
                debug!(id, "Removed todo");
                self.persist(true)
            }
            None => {
                debug!(id, "Remove: todo not found");
                Persisted::unchanged(false)
            }
        }
    }

    /// Flip the completed flag of the first todo with `id`
    ///
    /// `value` is false when no todo matched; the file is not touched then.
    pub fn toggle(&mut self, id: u32) -> Persisted<bool> {
        match self.position(id) {
            Some(index) => {
                let todo = &mut self.todos[index];
                todo.toggle();
                debug!(id, completed = todo.completed, "Toggled todo");
                self.persist(true)
            }
            None => {
                debug!(id, "Toggle: todo not found");
                Persisted::unchanged(false)
            }
        }
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.todos.iter().position(|t| t.id == id)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn search_by_id(&self, id: u32) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// First todo whose title contains `text`
    pub fn search_by_title(&self, text: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.title.contains(text))
    }

    /// Every todo whose title contains `text`, in collection order
    pub fn search_all_by_title(&self, text: &str) -> Vec<&Todo> {
        self.todos.iter().filter(|t| t.title.contains(text)).collect()
    }

    /// Evaluate `search` against the collection
    ///
    /// Id and keyword searches yield at most one todo (the first match).
    pub fn search(&self, search: &Search) -> Vec<&Todo> {
        let mut matches = self.todos.iter().filter(|t| search.matches(t));
        let results: Vec<&Todo> = if search.is_first_match() {
            matches.next().into_iter().collect()
        } else {
            matches.collect()
        };
        debug!(%search, count = results.len(), "Searched todos");
        results
    }

    pub fn list_completed(&self) -> Vec<&Todo> {
        self.list_by_status(Status::Completed)
    }

    pub fn list_remaining(&self) -> Vec<&Todo> {
        self.list_by_status(Status::Remaining)
    }

    fn list_by_status(&self, status: Status) -> Vec<&Todo> {
        self.todos.iter().filter(|t| status.matches(t)).collect()
    }

    pub fn list_all(&self) -> &[Todo] {
        &self.todos
    }
}
