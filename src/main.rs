//! Binary entry point that glues the SQLite-backed student store to the TUI:
//! open (and if needed create) the database file, hydrate the initial grid,
//! and drive the Ratatui event loop until the user exits.

use anyhow::Context;
use student_manager::{fetch_all_students, run_app, App, StudentStore};

/// Initialize persistence, load the current record set, and launch the
/// event loop. Returning a `Result` bubbles fatal initialization problems
/// (an unwritable database file, for example) to the terminal instead of
/// crashing silently.
fn main() -> anyhow::Result<()> {
    let store = StudentStore::open_default().context("failed to open the student database")?;
    let students = fetch_all_students(&store).context("failed to load student records")?;

    let mut app = App::new(store, students);
    run_app(&mut app)
}
