//! Persistence module split across logical submodules.

use thiserror::Error;

mod connection;
mod students;

pub use connection::StudentStore;
pub use students::{
    delete_student, fetch_all_students, find_students_by_name, insert_student, update_student,
};

/// Failures surfaced by the record store gateway. Connection and statement
/// failures abort the triggering action; `NotFound` replaces the silent
/// zero-rows-affected outcome for update and delete so the UI can tell the
/// user the row disappeared underneath them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open student database: {0}")]
    Open(#[source] rusqlite::Error),
    #[error("student database statement failed: {0}")]
    Statement(#[from] rusqlite::Error),
    #[error("no student record with id {0}")]
    NotFound(i64),
}
