// Todo record and id allocation

use eyre::{Result, eyre};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Title used when the caller does not supply one
pub const DEFAULT_TITLE: &str = "NO TITLE";

/// Description used when the caller does not supply one
pub const DEFAULT_DESCRIPTION: &str = "NO DESCRIPTION";

/// Inclusive upper bound of the id range drawn by [`IdStrategy::Random`]
pub const RANDOM_ID_MAX: u32 = 499;

/// A single todo entry, stored verbatim in the backing JSON array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl Todo {
    /// Build a fresh, not yet completed todo
    pub fn new(id: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// How `Store::create` picks the id of a new todo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// One past the highest id currently in the collection
    #[default]
    Sequential,
    /// Uniform draw from `0..=RANDOM_ID_MAX`, skipping ids already in use
    Random,
}

impl IdStrategy {
    /// Allocate an id that no record in `existing` carries
    ///
    /// Fails only for `Random` when every id in the range is taken.
    pub fn next_id(self, existing: &[Todo]) -> Result<u32> {
        match self {
            IdStrategy::Sequential => {
                let max = existing.iter().map(|t| t.id).max();
                match max {
                    None => Ok(0),
                    Some(m) => m
                        .checked_add(1)
                        .ok_or_else(|| eyre!("Todo id space exhausted (max id {})", m)),
                }
            }
            IdStrategy::Random => {
                let free: Vec<u32> = (0..=RANDOM_ID_MAX)
                    .filter(|id| !existing.iter().any(|t| t.id == *id))
                    .collect();
                if free.is_empty() {
                    return Err(eyre!("No free todo id left in 0..={}", RANDOM_ID_MAX));
                }
                let pick = rand::rng().random_range(0..free.len());
                Ok(free[pick])
            }
        }
    }
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdStrategy::Sequential => write!(f, "sequential"),
            IdStrategy::Random => write!(f, "random"),
        }
    }
}
