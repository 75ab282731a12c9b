use std::path::{Path, PathBuf};

use rusqlite::Connection;

use super::StoreError;

/// SQLite file name, kept next to the binary's working directory. There are
/// no CLI flags or environment variables; this relative path is the whole
/// configuration surface.
const DB_FILE_NAME: &str = "students.sqlite";

/// Handle to the student record store. Deliberately holds only the database
/// path: every operation opens its own connection, runs a single statement,
/// and drops the connection again, so there is no long-lived handle to
/// share or lock around.
#[derive(Debug, Clone)]
pub struct StudentStore {
    path: PathBuf,
}

impl StudentStore {
    /// Store backed by the default `students.sqlite` next to the process
    /// working directory.
    pub fn open_default() -> Result<StudentStore, StoreError> {
        StudentStore::open(DB_FILE_NAME)
    }

    /// Store backed by an explicit file path. Creates the file and the
    /// `students` table on first use.
    pub fn open(path: impl AsRef<Path>) -> Result<StudentStore, StoreError> {
        let store = StudentStore {
            path: path.as_ref().to_path_buf(),
        };
        // Opening once up front surfaces a missing/unwritable file at
        // startup instead of on the first user action.
        let conn = store.connect()?;
        drop(conn);
        Ok(store)
    }

    /// Open a fresh connection and make sure the schema exists. Called at
    /// the top of every gateway operation.
    pub(crate) fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.path).map_err(StoreError::Open)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS students (
                id INTEGER PRIMARY KEY,
                name TEXT,
                course TEXT,
                mobile TEXT
            )",
            [],
        )?;
        Ok(conn)
    }
}
