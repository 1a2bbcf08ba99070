// State management module
// Handles the in-memory post store and its ordering options

pub mod app_state;
pub mod sort;

pub use app_state::{AppState, Post, PostId, PostUpdate, SharedState};
pub use sort::{SortDirection, SortField};
