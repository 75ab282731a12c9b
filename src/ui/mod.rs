//! Ratatui front-end for the student manager. The grid plus a family of
//! modal dialogs (insert, edit, delete-confirm, search, about, theme) layered
//! over it; all state flows through [`App`] rather than anything global.

mod app;
mod forms;
mod helpers;
mod table;
mod terminal;
mod theme;

pub use app::App;
pub use table::StudentTable;
pub use terminal::run_app;
pub use theme::{Theme, ThemeChoice};
