//! Domain models that mirror the SQLite schema and get passed throughout the
//! TUI. These stay light-weight data holders so the persistence and
//! presentation layers can focus on their own logic.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One row of the `students` table as displayed in the grid.
pub struct StudentRecord {
    /// Primary key assigned by the store on insert. Edit and delete flows
    /// bubble this id back to the persistence layer, so we carry it even
    /// though the grid only needs display text.
    pub id: i64,
    /// Student name, free text. The store accepts an empty string if the
    /// user submits a blank form field.
    pub name: String,
    /// Course name. Stored as plain text; only the form selector constrains
    /// it to the known [`Course`] set.
    pub course: String,
    /// Mobile number, free-form text with no format validation.
    pub mobile: String,
}

/// The fixed course offering presented by the form selector. The store does
/// not enforce this set, so rows written by other tools may carry arbitrary
/// course text and still render fine.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Course {
    #[default]
    Biology,
    Math,
    Astronomy,
    Physics,
}

impl Course {
    /// Every selectable course, in the order the selector cycles through.
    pub const ALL: [Course; 4] = [
        Course::Biology,
        Course::Math,
        Course::Astronomy,
        Course::Physics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Biology => "Biology",
            Course::Math => "Math",
            Course::Astronomy => "Astronomy",
            Course::Physics => "Physics",
        }
    }

    /// Map stored course text back onto the selector, falling back to the
    /// first entry when the text is not one of the known courses.
    pub fn from_stored(text: &str) -> Course {
        Course::ALL
            .into_iter()
            .find(|course| course.as_str() == text)
            .unwrap_or_default()
    }
}

impl fmt::Display for Course {
    /// Display is implemented so the type plays nicely with Ratatui widgets
    /// that consume strings implicitly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_text_round_trips_through_selector() {
        for course in Course::ALL {
            assert_eq!(Course::from_stored(course.as_str()), course);
        }
    }

    #[test]
    fn unknown_course_text_falls_back_to_first_entry() {
        assert_eq!(Course::from_stored("Alchemy"), Course::Biology);
        assert_eq!(Course::from_stored(""), Course::Biology);
    }
}
