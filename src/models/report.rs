//! Clinical report model.

use serde::{Deserialize, Serialize};

/// A free-text clinical note authored by a professional about a patient.
///
/// The id is the string form of a sequential counter assigned by the
/// report log; ids are never reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Sequential identifier ("1", "2", ...).
    pub id: String,
    /// Authoring professional.
    pub professional_id: String,
    /// Subject patient.
    pub fiscal_code: String,
    /// Date of the note.
    pub date: String,
    /// Free-text body.
    pub description: String,
}

impl Report {
    /// Creates a report with an already-assigned id.
    pub fn new(
        id: impl Into<String>,
        professional_id: impl Into<String>,
        fiscal_code: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            professional_id: professional_id.into(),
            fiscal_code: fiscal_code.into(),
            date: date.into(),
            description: description.into(),
        }
    }
}
