use ratatui::style::{Color, Modifier, Style};

/// Which preset the theme picker currently points at.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ThemeChoice {
    Light,
    Dark,
}

impl ThemeChoice {
    pub fn toggle(&mut self) {
        *self = match self {
            ThemeChoice::Light => ThemeChoice::Dark,
            ThemeChoice::Dark => ThemeChoice::Light,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeChoice::Light => "Light",
            ThemeChoice::Dark => "Dark",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeChoice::Light => Theme::light(),
            ThemeChoice::Dark => Theme::dark(),
        }
    }
}

/// Style preset owned by the top-level [`App`](super::App) and threaded into
/// every draw call. Keeping the theme an explicit value means switching it
/// only touches the one field that owns it; nothing ambient or process-wide
/// changes.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Base style painted across the whole frame.
    pub base: Style,
    /// Menu bar groups (File, Edit, Help, Setting).
    pub menu: Style,
    /// Keyboard shortcuts inside the menu bar and footer hints.
    pub key: Style,
    /// Table column header row.
    pub header: Style,
    /// The row under the cursor.
    pub selected_row: Style,
    /// Rows highlighted by the last search.
    pub matched_row: Style,
    /// Footer hint text and modal instructions.
    pub hint: Style,
    /// Footer status line, info severity.
    pub info: Style,
    /// Footer status line and form errors.
    pub error: Style,
    /// The form field currently holding focus.
    pub field_active: Style,
    /// Placeholder text for empty form fields.
    pub field_empty: Style,
}

impl Theme {
    pub fn light() -> Theme {
        Theme {
            base: Style::default().bg(Color::White).fg(Color::Black),
            menu: Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            key: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            header: Style::default()
                .fg(Color::Black)
                .bg(Color::Gray)
                .add_modifier(Modifier::BOLD),
            selected_row: Style::default().bg(Color::LightBlue).fg(Color::Black),
            matched_row: Style::default().bg(Color::LightYellow).fg(Color::Black),
            hint: Style::default().fg(Color::DarkGray),
            info: Style::default().fg(Color::Green),
            error: Style::default().fg(Color::Red),
            field_active: Style::default().fg(Color::Blue),
            field_empty: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn dark() -> Theme {
        Theme {
            base: Style::default().bg(Color::Black).fg(Color::White),
            menu: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            key: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            header: Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            selected_row: Style::default().bg(Color::Blue).fg(Color::White),
            matched_row: Style::default().bg(Color::Yellow).fg(Color::Black),
            hint: Style::default().fg(Color::Gray),
            info: Style::default().fg(Color::Green),
            error: Style::default().fg(Color::Red),
            field_active: Style::default().fg(Color::Yellow),
            field_empty: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Default for Theme {
    /// The application starts dark; most terminals do too.
    fn default() -> Theme {
        Theme::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_the_two_presets() {
        let mut choice = ThemeChoice::Light;
        choice.toggle();
        assert_eq!(choice, ThemeChoice::Dark);
        choice.toggle();
        assert_eq!(choice, ThemeChoice::Light);
    }

    #[test]
    fn presets_disagree_on_the_base_background() {
        assert_ne!(Theme::light().base.bg, Theme::dark().base.bg);
    }
}
