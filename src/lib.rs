//! Masterblog API Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
/// Application state management
///
/// Holds the in-memory post store shared by the request handlers.
pub mod state;

pub use router::build_router;
