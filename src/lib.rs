// TodoStore - Todo list kept in memory and mirrored to a single JSON file

pub mod config;
pub mod json_file;
pub mod logging;
pub mod render;
pub mod search;
pub mod store;
pub mod todo;

// Re-export main types for convenience
pub use config::Config;
pub use search::{Search, Status};
pub use store::{Persisted, Store};
pub use todo::{IdStrategy, Todo};
