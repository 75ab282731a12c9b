use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::db::{
    delete_student, find_students_by_name, insert_student, update_student, StoreError,
    StudentStore,
};
use crate::models::StudentRecord;

use super::forms::{ConfirmStudentDelete, SearchForm, StudentField, StudentForm};
use super::helpers::{centered_rect, surface_error};
use super::table::{StudentTable, COLUMN_LABELS};
use super::theme::{Theme, ThemeChoice};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Acknowledgment shown after a successful delete.
const DELETE_NOTICE: &str = "The record was deleted successfully.";

/// Modal dialogs layered over the grid. Exactly one is open at a time;
/// `Normal` means the grid itself has focus.
enum Mode {
    Normal,
    Inserting(StudentForm),
    Editing { id: i64, form: StudentForm },
    ConfirmDelete(ConfirmStudentDelete),
    Searching(SearchForm),
    About,
    PickingTheme(ThemeChoice),
    Notice(String),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self, theme: &Theme) -> Style {
        match self {
            StatusKind::Info => theme.info,
            StatusKind::Error => theme.error,
        }
    }
}

/// Central application state. Dialogs receive everything they need through
/// this struct; there is no globally shared window or process-wide style, so
/// the theme travels with the value that owns it.
pub struct App {
    store: StudentStore,
    table: StudentTable,
    theme_choice: ThemeChoice,
    theme: Theme,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(store: StudentStore, records: Vec<StudentRecord>) -> Self {
        Self {
            store,
            table: StudentTable::new(records),
            theme_choice: ThemeChoice::Dark,
            theme: Theme::dark(),
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Route one key press to whichever dialog (or the grid) has focus.
    /// Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit),
            Mode::Inserting(form) => self.handle_insert(code, form),
            Mode::Editing { id, form } => self.handle_edit(code, id, form),
            Mode::ConfirmDelete(confirm) => self.handle_confirm_delete(code, confirm),
            Mode::Searching(form) => self.handle_search(code, form),
            Mode::About => Mode::Normal,
            Mode::PickingTheme(choice) => self.handle_theme_picker(code, choice),
            Mode::Notice(_) => Mode::Normal,
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Up => self.table.move_selection(-1),
            KeyCode::Down => self.table.move_selection(1),
            KeyCode::PageUp => self.table.move_selection(-5),
            KeyCode::PageDown => self.table.move_selection(5),
            KeyCode::Home => self.table.select_first(),
            KeyCode::End => self.table.select_last(),
            KeyCode::Char('a') | KeyCode::Char('+') => {
                self.clear_status();
                return Mode::Inserting(StudentForm::default());
            }
            KeyCode::Char('f') | KeyCode::Char('/') => {
                self.clear_status();
                return Mode::Searching(SearchForm::default());
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                // Edit stays unavailable until a row is selected; there is
                // no dialog to open against an empty grid.
                if let Some(record) = self.table.current_record().cloned() {
                    self.clear_status();
                    return Mode::Editing {
                        id: record.id,
                        form: StudentForm::from_record(&record),
                    };
                }
                self.set_status("No student selected to edit.", StatusKind::Error);
            }
            KeyCode::Char('d') | KeyCode::Char('-') => {
                if let Some(record) = self.table.current_record().cloned() {
                    self.clear_status();
                    return Mode::ConfirmDelete(ConfirmStudentDelete { record });
                }
                self.set_status("No student selected to delete.", StatusKind::Error);
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.clear_status();
                return Mode::PickingTheme(self.theme_choice);
            }
            KeyCode::Char('?') => {
                self.clear_status();
                return Mode::About;
            }
            _ => {}
        }
        Mode::Normal
    }

    fn handle_insert(&mut self, code: KeyCode, mut form: StudentForm) -> Mode {
        match code {
            KeyCode::Esc => return Mode::Normal,
            KeyCode::Tab => form.toggle_field(),
            KeyCode::Left => form.cycle_course(-1),
            KeyCode::Right => form.cycle_course(1),
            KeyCode::Backspace => {
                form.backspace();
                form.error = None;
            }
            KeyCode::Enter => match form.parse_inputs() {
                Ok((name, course, mobile)) => {
                    match insert_student(&self.store, &name, &course, &mobile) {
                        Ok(record) => {
                            self.reload_table();
                            self.set_status(format!("Added {}.", record.name), StatusKind::Info);
                            return Mode::Normal;
                        }
                        Err(err) => form.error = Some(store_error_text(err)),
                    }
                }
                Err(err) => form.error = Some(surface_error(&err)),
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Mode::Inserting(form)
    }

    fn handle_edit(&mut self, code: KeyCode, id: i64, mut form: StudentForm) -> Mode {
        match code {
            KeyCode::Esc => return Mode::Normal,
            KeyCode::Tab => form.toggle_field(),
            KeyCode::Left => form.cycle_course(-1),
            KeyCode::Right => form.cycle_course(1),
            KeyCode::Backspace => {
                form.backspace();
                form.error = None;
            }
            KeyCode::Enter => match form.parse_inputs() {
                Ok((name, course, mobile)) => {
                    match update_student(&self.store, id, &name, &course, &mobile) {
                        Ok(()) => {
                            self.reload_table();
                            self.set_status(format!("Updated {name}."), StatusKind::Info);
                            return Mode::Normal;
                        }
                        // The row vanished between display and submit. Drop
                        // the dialog and resync the grid with the store.
                        Err(err @ StoreError::NotFound(_)) => {
                            self.reload_table();
                            self.set_status(store_error_text(err), StatusKind::Error);
                            return Mode::Normal;
                        }
                        Err(err) => form.error = Some(store_error_text(err)),
                    }
                }
                Err(err) => form.error = Some(surface_error(&err)),
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Mode::Editing { id, form }
    }

    fn handle_confirm_delete(&mut self, code: KeyCode, confirm: ConfirmStudentDelete) -> Mode {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                match delete_student(&self.store, confirm.record.id) {
                    Ok(()) => {
                        self.reload_table();
                        return Mode::Notice(DELETE_NOTICE.to_string());
                    }
                    Err(err @ StoreError::NotFound(_)) => {
                        self.reload_table();
                        self.set_status(store_error_text(err), StatusKind::Error);
                    }
                    Err(err) => {
                        self.set_status(store_error_text(err), StatusKind::Error);
                    }
                }
                Mode::Normal
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Mode::Normal,
            _ => Mode::ConfirmDelete(confirm),
        }
    }

    fn handle_search(&mut self, code: KeyCode, mut form: SearchForm) -> Mode {
        match code {
            KeyCode::Esc => Mode::Normal,
            KeyCode::Backspace => {
                form.backspace();
                Mode::Searching(form)
            }
            KeyCode::Enter => {
                match find_students_by_name(&self.store, &form.name) {
                    Ok(records) => {
                        let hits = self.table.mark_matches(records.iter().map(|r| r.id));
                        if hits == 0 {
                            self.set_status(
                                format!("No students named '{}'.", form.name),
                                StatusKind::Error,
                            );
                        } else {
                            self.set_status(
                                format!("{hits} student(s) named '{}'.", form.name),
                                StatusKind::Info,
                            );
                        }
                    }
                    Err(err) => self.set_status(store_error_text(err), StatusKind::Error),
                }
                Mode::Normal
            }
            KeyCode::Char(ch) => {
                form.push_char(ch);
                Mode::Searching(form)
            }
            _ => Mode::Searching(form),
        }
    }

    fn handle_theme_picker(&mut self, code: KeyCode, mut choice: ThemeChoice) -> Mode {
        match code {
            KeyCode::Esc => Mode::Normal,
            KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                choice.toggle();
                Mode::PickingTheme(choice)
            }
            KeyCode::Enter => {
                self.theme_choice = choice;
                self.theme = choice.theme();
                self.set_status(
                    format!("Switched to the {} theme.", choice.label().to_lowercase()),
                    StatusKind::Info,
                );
                Mode::Normal
            }
            _ => Mode::PickingTheme(choice),
        }
    }

    /// Full refetch after a mutation. A failing reload leaves the previous
    /// grid contents in place and reports through the status line.
    fn reload_table(&mut self) {
        if let Err(err) = self.table.reload(&self.store) {
            self.set_status(store_error_text(err), StatusKind::Error);
        }
    }

    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(self.theme.base), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_menu(frame, chunks[0]);
        self.draw_table(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);

        match &self.mode {
            Mode::Normal => {}
            Mode::Inserting(form) => {
                self.draw_student_form(frame, area, "Insert Student Data", form)
            }
            Mode::Editing { form, .. } => {
                self.draw_student_form(frame, area, "Update Student Data", form)
            }
            Mode::ConfirmDelete(confirm) => self.draw_confirm_delete(frame, area, confirm),
            Mode::Searching(form) => self.draw_search(frame, area, form),
            Mode::About => self.draw_about(frame, area),
            Mode::PickingTheme(choice) => self.draw_theme_picker(frame, area, *choice),
            Mode::Notice(text) => self.draw_notice(frame, area, text),
        }
    }

    /// The menu bar analog: four groups, each with its shortcut.
    fn draw_menu(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(" File ", self.theme.menu),
            Span::styled("[a]", self.theme.key),
            Span::raw(" Add Student   "),
            Span::styled("Edit ", self.theme.menu),
            Span::styled("[f]", self.theme.key),
            Span::raw(" Search   "),
            Span::styled("Help ", self.theme.menu),
            Span::styled("[?]", self.theme.key),
            Span::raw(" About   "),
            Span::styled("Setting ", self.theme.menu),
            Span::styled("[t]", self.theme.key),
            Span::raw(" Theme"),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Students");

        if self.table.is_empty() {
            let message = Paragraph::new("No students yet. Press 'a' to add one.")
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let header = Row::new(COLUMN_LABELS.iter().map(|label| Cell::from(*label)))
            .style(self.theme.header);

        let rows = self.table.records().iter().map(|record| {
            let cells = [
                record.id.to_string(),
                record.name.clone(),
                record.course.clone(),
                record.mobile.clone(),
            ];
            let row = Row::new(cells.into_iter().map(Cell::from));
            if self.table.is_matched(record.id) {
                row.style(self.theme.matched_row)
            } else {
                row
            }
        });

        let widths = [
            Constraint::Length(6),
            Constraint::Percentage(40),
            Constraint::Length(12),
            Constraint::Percentage(30),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(self.theme.selected_row);

        let mut state = TableState::default();
        state.select(self.table.selected_index());
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(
                status.text.clone(),
                status.kind.style(&self.theme),
            )])
        } else {
            Line::from("")
        };

        let paragraph =
            Paragraph::new(vec![status_line, self.footer_instructions()]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    /// Contextual key hints. The Edit/Delete pair only appears while a row
    /// is selected, mirroring how the status bar buttons came and went with
    /// the cell click.
    fn footer_instructions(&self) -> Line<'static> {
        let key_style = self.theme.key;
        let mut spans = vec![
            Span::styled("[↑↓]", key_style),
            Span::raw(" Select   "),
            Span::styled("[a]", key_style),
            Span::raw(" Add   "),
            Span::styled("[f]", key_style),
            Span::raw(" Search   "),
        ];
        if self.table.current_record().is_some() {
            spans.extend([
                Span::styled("[e]", key_style),
                Span::raw(" Edit Record   "),
                Span::styled("[d]", key_style),
                Span::raw(" Delete Record   "),
            ]);
        }
        spans.extend([
            Span::styled("[t]", key_style),
            Span::raw(" Theme   "),
            Span::styled("[q]", key_style),
            Span::raw(" Quit"),
        ]);
        Line::from(spans)
    }

    fn draw_student_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &StudentForm) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let name_line = form.build_line("Name", StudentField::Name, &self.theme);
        let course_line = form.build_line("Course", StudentField::Course, &self.theme);
        let mobile_line = form.build_line("Mobile", StudentField::Mobile, &self.theme);

        let mut lines = vec![name_line, course_line, mobile_line, Line::from("")];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(error.clone(), self.theme.error)));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Tab to switch • ←/→ to pick course • Esc to cancel",
                self.theme.hint,
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (cursor_x, cursor_y) = match form.active {
            StudentField::Name => {
                let prefix = "Name: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(StudentField::Name) as u16,
                    inner.y,
                )
            }
            StudentField::Course => {
                let prefix = "Course: < ".len() as u16;
                (
                    inner.x + prefix + form.value_len(StudentField::Course) as u16,
                    inner.y + 1,
                )
            }
            StudentField::Mobile => {
                let prefix = "Mobile: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(StudentField::Mobile) as u16,
                    inner.y + 2,
                )
            }
        };
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmStudentDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Delete Student Data")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!(
                "Are you sure you want to delete {} (id {})?",
                confirm.record.name, confirm.record.id
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                self.theme.hint,
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_search(&self, frame: &mut Frame, area: Rect, form: &SearchForm) {
        let popup_area = centered_rect(50, 20, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Search Student").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(vec![
                Span::raw("Name: "),
                Span::styled(form.name.clone(), self.theme.field_active),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Enter to search • Esc to cancel",
                self.theme.hint,
            )),
        ];

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let cursor_x = inner.x + "Name: ".len() as u16 + form.name.chars().count() as u16;
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn draw_about(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("About").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from("Student Manager"),
            Line::from(""),
            Line::from("A small SQLite-backed manager for a student record table."),
            Line::from("Feel free to reuse or modify this app."),
            Line::from(""),
            Line::from(Span::styled("Press any key to close.", self.theme.hint)),
        ];

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_theme_picker(&self, frame: &mut Frame, area: Rect, choice: ThemeChoice) {
        let popup_area = centered_rect(30, 25, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Theme").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = Vec::new();
        for option in [ThemeChoice::Light, ThemeChoice::Dark] {
            let style = if option == choice {
                self.theme.selected_row
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(option.label(), style)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "↑/↓ to choose • Enter to apply • Esc to cancel",
            self.theme.hint,
        )));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_notice(&self, frame: &mut Frame, area: Rect, text: &str) {
        let popup_area = centered_rect(50, 20, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Success!").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(text.to_string()),
            Line::from(""),
            Line::from(Span::styled("Press any key to close.", self.theme.hint)),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}

/// Pull the most relevant message out of a store failure for display.
fn store_error_text(err: StoreError) -> String {
    surface_error(&anyhow::Error::new(err))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::{fs, process};

    use super::*;
    use crate::db::fetch_all_students;

    static NEXT_DB: AtomicU32 = AtomicU32::new(0);

    struct TempStore {
        store: StudentStore,
        path: PathBuf,
    }

    impl TempStore {
        fn new() -> TempStore {
            let path = std::env::temp_dir().join(format!(
                "student-manager-app-test-{}-{}.sqlite",
                process::id(),
                NEXT_DB.fetch_add(1, Ordering::Relaxed)
            ));
            let _ = fs::remove_file(&path);
            let store = StudentStore::open(&path).unwrap();
            TempStore { store, path }
        }
    }

    impl Drop for TempStore {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.path);
        }
    }

    fn new_app(temp: &TempStore) -> App {
        let records = fetch_all_students(&temp.store).unwrap();
        App::new(temp.store.clone(), records)
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(KeyCode::Char(ch)).unwrap();
        }
    }

    #[test]
    fn insert_dialog_adds_a_row_and_reloads_the_grid() {
        let temp = TempStore::new();
        let mut app = new_app(&temp);

        app.handle_key(KeyCode::Char('a')).unwrap();
        type_text(&mut app, "Ann");
        app.handle_key(KeyCode::Tab).unwrap(); // Course
        app.handle_key(KeyCode::Right).unwrap(); // Biology -> Math
        app.handle_key(KeyCode::Tab).unwrap(); // Mobile
        type_text(&mut app, "555-1234");
        app.handle_key(KeyCode::Enter).unwrap();

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.table.records().len(), 1);
        let record = &app.table.records()[0];
        assert_eq!(record.name, "Ann");
        assert_eq!(record.course, "Math");
        assert_eq!(record.mobile, "555-1234");

        let stored = fetch_all_students(&temp.store).unwrap();
        assert_eq!(stored.as_slice(), app.table.records());
    }

    #[test]
    fn cancelled_insert_leaves_the_store_untouched() {
        let temp = TempStore::new();
        let mut app = new_app(&temp);

        app.handle_key(KeyCode::Char('a')).unwrap();
        type_text(&mut app, "Ann");
        app.handle_key(KeyCode::Esc).unwrap();

        assert!(matches!(app.mode, Mode::Normal));
        assert!(fetch_all_students(&temp.store).unwrap().is_empty());
    }

    #[test]
    fn blank_name_keeps_the_insert_dialog_open_with_an_error() {
        let temp = TempStore::new();
        let mut app = new_app(&temp);

        app.handle_key(KeyCode::Char('a')).unwrap();
        app.handle_key(KeyCode::Enter).unwrap();

        match &app.mode {
            Mode::Inserting(form) => assert!(form.error.is_some()),
            _ => panic!("expected the insert dialog to stay open"),
        }
    }

    #[test]
    fn edit_is_unavailable_on_an_empty_grid() {
        let temp = TempStore::new();
        let mut app = new_app(&temp);

        app.handle_key(KeyCode::Char('e')).unwrap();

        assert!(matches!(app.mode, Mode::Normal));
        assert!(matches!(
            app.status,
            Some(StatusMessage {
                kind: StatusKind::Error,
                ..
            })
        ));
    }

    #[test]
    fn edit_dialog_rewrites_the_selected_row() {
        let temp = TempStore::new();
        insert_student(&temp.store, "Ann", "Math", "555-1234").unwrap();
        let mut app = new_app(&temp);

        app.handle_key(KeyCode::Char('e')).unwrap();
        // Append to the pre-populated name, switch course, replace mobile.
        type_text(&mut app, "e");
        app.handle_key(KeyCode::Tab).unwrap();
        app.handle_key(KeyCode::Right).unwrap(); // Math -> Astronomy
        app.handle_key(KeyCode::Right).unwrap(); // Astronomy -> Physics
        app.handle_key(KeyCode::Tab).unwrap();
        for _ in 0.."555-1234".len() {
            app.handle_key(KeyCode::Backspace).unwrap();
        }
        type_text(&mut app, "555-9999");
        app.handle_key(KeyCode::Enter).unwrap();

        let stored = fetch_all_students(&temp.store).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Anne");
        assert_eq!(stored[0].course, "Physics");
        assert_eq!(stored[0].mobile, "555-9999");
    }

    #[test]
    fn delete_confirms_then_acknowledges() {
        let temp = TempStore::new();
        insert_student(&temp.store, "Ann", "Math", "1").unwrap();
        let mut app = new_app(&temp);

        app.handle_key(KeyCode::Char('d')).unwrap();
        assert!(matches!(app.mode, Mode::ConfirmDelete(_)));
        app.handle_key(KeyCode::Char('y')).unwrap();

        assert!(matches!(app.mode, Mode::Notice(_)));
        assert!(fetch_all_students(&temp.store).unwrap().is_empty());
        assert!(app.table.is_empty());

        // Any key dismisses the acknowledgment.
        app.handle_key(KeyCode::Char('x')).unwrap();
        assert!(matches!(app.mode, Mode::Normal));
    }

    #[test]
    fn declined_delete_keeps_the_row() {
        let temp = TempStore::new();
        insert_student(&temp.store, "Ann", "Math", "1").unwrap();
        let mut app = new_app(&temp);

        app.handle_key(KeyCode::Char('d')).unwrap();
        app.handle_key(KeyCode::Char('n')).unwrap();

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(fetch_all_students(&temp.store).unwrap().len(), 1);
    }

    #[test]
    fn search_highlights_exact_matches_only() {
        let temp = TempStore::new();
        let ann = insert_student(&temp.store, "Ann", "Math", "1").unwrap();
        let anna = insert_student(&temp.store, "Anna", "Biology", "2").unwrap();
        let mut app = new_app(&temp);

        app.handle_key(KeyCode::Char('f')).unwrap();
        type_text(&mut app, "Ann");
        app.handle_key(KeyCode::Enter).unwrap();

        assert!(matches!(app.mode, Mode::Normal));
        assert!(app.table.is_matched(ann.id));
        assert!(!app.table.is_matched(anna.id));
        assert_eq!(app.table.current_record().unwrap().id, ann.id);
    }

    #[test]
    fn theme_picker_swaps_the_owned_theme_value() {
        let temp = TempStore::new();
        let mut app = new_app(&temp);
        assert_eq!(app.theme_choice, ThemeChoice::Dark);

        app.handle_key(KeyCode::Char('t')).unwrap();
        app.handle_key(KeyCode::Up).unwrap();
        app.handle_key(KeyCode::Enter).unwrap();

        assert_eq!(app.theme_choice, ThemeChoice::Light);
        assert_eq!(app.theme.base.bg, Theme::light().base.bg);
    }
}
