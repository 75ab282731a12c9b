use anyhow::{anyhow, Result};
use ratatui::text::{Line, Span};

use crate::models::{Course, StudentRecord};

use super::theme::Theme;

/// Internal representation of the insert/edit form fields. The same form
/// backs both dialogs; only the title and the submit path differ.
#[derive(Default, Clone)]
pub(crate) struct StudentForm {
    pub(crate) name: String,
    pub(crate) course: Course,
    pub(crate) mobile: String,
    pub(crate) active: StudentField,
    pub(crate) error: Option<String>,
}

/// Fields available within the student form, in focus order.
#[derive(Default, Copy, Clone, PartialEq, Eq)]
pub(crate) enum StudentField {
    #[default]
    Name,
    Course,
    Mobile,
}

impl StudentForm {
    /// Populate the form from the selected row when entering edit mode.
    pub(crate) fn from_record(record: &StudentRecord) -> Self {
        Self {
            name: record.name.clone(),
            course: Course::from_stored(&record.course),
            mobile: record.mobile.clone(),
            active: StudentField::Name,
            error: None,
        }
    }

    /// Cycle focus across the three fields.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            StudentField::Name => StudentField::Course,
            StudentField::Course => StudentField::Mobile,
            StudentField::Mobile => StudentField::Name,
        };
    }

    /// Insert a character into the active text field. The course selector
    /// takes no typed input; it only cycles.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            StudentField::Name => self.name.push(ch),
            StudentField::Course => return false,
            StudentField::Mobile => self.mobile.push(ch),
        }
        true
    }

    /// Remove a character from the active text field.
    pub(crate) fn backspace(&mut self) {
        match self.active {
            StudentField::Name => {
                self.name.pop();
            }
            StudentField::Course => {}
            StudentField::Mobile => {
                self.mobile.pop();
            }
        }
    }

    /// Step the course selector when it holds focus. Wraps at both ends so
    /// Left from the first entry lands on the last.
    pub(crate) fn cycle_course(&mut self, step: isize) {
        if self.active != StudentField::Course {
            return;
        }
        let len = Course::ALL.len() as isize;
        let current = Course::ALL
            .iter()
            .position(|c| *c == self.course)
            .unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len);
        self.course = Course::ALL[next as usize];
    }

    /// Validate and normalize the inputs before they reach the store.
    /// Presence of a name is the only rule; the mobile field is free-form.
    pub(crate) fn parse_inputs(&self) -> Result<(String, String, String)> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Student name is required."));
        }
        Ok((
            name.to_string(),
            self.course.as_str().to_string(),
            self.mobile.trim().to_string(),
        ))
    }

    /// Render a styled line for the modal form. The course row draws as a
    /// `< value >` selector instead of a text field.
    pub(crate) fn build_line(
        &self,
        field_name: &str,
        field: StudentField,
        theme: &Theme,
    ) -> Line<'static> {
        let is_active = self.active == field;

        if field == StudentField::Course {
            let display = if is_active {
                format!("< {} >", self.course)
            } else {
                self.course.to_string()
            };
            let style = if is_active {
                theme.field_active
            } else {
                theme.base
            };
            return Line::from(vec![
                Span::raw(format!("{field_name}: ")),
                Span::styled(display, style),
            ]);
        }

        let value = match field {
            StudentField::Name => &self.name,
            _ => &self.mobile,
        };

        let placeholder = match field {
            StudentField::Name => "<required>",
            _ => "<optional>",
        };

        let display = if value.is_empty() {
            placeholder.to_string()
        } else {
            value.clone()
        };

        let style = if is_active {
            theme.field_active
        } else if value.is_empty() {
            theme.field_empty
        } else {
            theme.base
        };

        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ])
    }

    /// Character length of the requested field, used for cursor placement.
    pub(crate) fn value_len(&self, field: StudentField) -> usize {
        match field {
            StudentField::Name => self.name.chars().count(),
            StudentField::Course => self.course.as_str().chars().count(),
            StudentField::Mobile => self.mobile.chars().count(),
        }
    }
}

/// State for the delete confirmation dialog. Holds the whole record so the
/// dialog can show who is about to disappear.
#[derive(Clone)]
pub(crate) struct ConfirmStudentDelete {
    pub(crate) record: StudentRecord,
}

/// State for the search dialog, a single name field.
#[derive(Default, Clone)]
pub(crate) struct SearchForm {
    pub(crate) name: String,
}

impl SearchForm {
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.name.push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.name.pop();
    }
}
