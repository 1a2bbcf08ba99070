//! API module
//!
//! Contains HTTP request handlers for post management endpoints

pub mod docs;
pub mod extract;
pub mod posts;
pub mod utils;
