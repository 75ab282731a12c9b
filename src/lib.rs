//! Core library surface for the student manager TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as potential external tooling can reuse the same
//! pieces: the SQLite-backed record store gateway, the domain models, and
//! the interactive front-end.

pub mod db;
pub mod models;
pub mod ui;

/// Convenience re-exports for the persistence layer. `main.rs` uses these to
/// open the store and preload the grid before the event loop starts.
pub use db::{fetch_all_students, StoreError, StudentStore};

/// The domain types the other layers pass around.
pub use models::{Course, StudentRecord};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
