//! Patient model and admission lifecycle states.
//!
//! # Lifecycle
//!
//! Every patient enters the system `Admitted`. The placement decision
//! moves them to exactly one of two terminal states:
//!
//! | From | To | When |
//! |------|----|------|
//! | `Admitted` | `Hospitalized` | the requested department has a free bed |
//! | `Admitted` | `Discharged` | the requested department is full |
//!
//! No transition ever leaves `Hospitalized` or `Discharged`.

use serde::{Deserialize, Serialize};

/// Where a patient stands in the admission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientStatus {
    /// Registered and awaiting a placement decision.
    Admitted,
    /// Occupying a bed in a department. Terminal.
    Hospitalized,
    /// Sent home for lack of a bed. Terminal.
    Discharged,
}

impl PatientStatus {
    /// Whether the placement decision has already been made.
    #[inline]
    pub fn is_settled(self) -> bool {
        !matches!(self, PatientStatus::Admitted)
    }
}

/// A patient registered with the emergency room.
///
/// Keyed by fiscal code; never deleted. Only `status` is ever mutated,
/// and only by the lifecycle transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    /// Unique identifier, supplied by the caller.
    pub fiscal_code: String,
    /// First name.
    pub name: String,
    /// Surname.
    pub surname: String,
    /// Birth date.
    pub birth_date: String,
    /// Reason given at admission.
    pub reason: String,
    /// Admission date.
    pub admitted_on: String,
    /// Current lifecycle state.
    pub status: PatientStatus,
}

impl Patient {
    /// Creates a freshly admitted patient.
    pub fn new(
        fiscal_code: impl Into<String>,
        name: impl Into<String>,
        surname: impl Into<String>,
        birth_date: impl Into<String>,
        reason: impl Into<String>,
        admitted_on: impl Into<String>,
    ) -> Self {
        Self {
            fiscal_code: fiscal_code.into(),
            name: name.into(),
            surname: surname.into(),
            birth_date: birth_date.into(),
            reason: reason.into(),
            admitted_on: admitted_on.into(),
            status: PatientStatus::Admitted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_patient() -> Patient {
        Patient::new(
            "RSSMRA80A01H501U",
            "Mario",
            "Rossi",
            "1980-01-01",
            "chest pain",
            "2024-03-05",
        )
    }

    #[test]
    fn test_new_patient_is_admitted() {
        let p = make_patient();
        assert_eq!(p.status, PatientStatus::Admitted);
        assert!(!p.status.is_settled());
        assert!(PatientStatus::Hospitalized.is_settled());
        assert!(PatientStatus::Discharged.is_settled());
    }

    #[test]
    fn test_status_serializes_as_variant_name() {
        let p = make_patient();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["status"], "Admitted");
        assert_eq!(json["fiscal_code"], "RSSMRA80A01H501U");
    }
}
