//! Patient-to-professional matching.
//!
//! # Eligibility
//!
//! A professional is eligible for a patient when the specialization tag
//! matches exactly and the duty window contains the patient's admission
//! date (inclusive at both ends).
//!
//! # Tie-break
//!
//! Among eligible professionals the lexicographically smallest id wins:
//! not first-registered, not widest-availability. Repeated runs over the
//! same registries always produce the same match.

use std::collections::BTreeMap;

use crate::models::Professional;

/// Picks the eligible professional for a patient admitted on `date`.
///
/// Returns `None` when nobody with the given specialization is on duty
/// that day. The iterator is scanned in full; with id-ordered input the
/// first match would suffice, but `min_by` keeps the tie-break explicit
/// and input-order independent.
pub fn pick_on_duty<'a>(
    professionals: impl Iterator<Item = &'a Professional>,
    specialization: &str,
    date: &str,
) -> Option<&'a Professional> {
    professionals
        .filter(|p| p.specialization == specialization && p.is_on_duty(date))
        .min_by(|a, b| a.id.cmp(&b.id))
}

/// Durable record of which professional was assigned to which patient.
///
/// The registries alone cannot answer "discharged patients treated by
/// specialization X": the link between patient and professional exists
/// only at assignment time. This map persists it, fiscal code to
/// professional id, latest assignment winning.
#[derive(Debug, Clone, Default)]
pub struct AssignmentHistory {
    by_patient: BTreeMap<String, String>,
}

impl AssignmentHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an assignment, replacing any previous one for the patient.
    pub fn record(&mut self, fiscal_code: impl Into<String>, professional_id: impl Into<String>) {
        self.by_patient
            .insert(fiscal_code.into(), professional_id.into());
    }

    /// The professional most recently assigned to a patient, if any.
    pub fn professional_for(&self, fiscal_code: &str) -> Option<&str> {
        self.by_patient.get(fiscal_code).map(String::as_str)
    }

    /// Iterates (fiscal code, professional id) pairs in fiscal-code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_patient
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DutyPeriod;

    fn make_professional(id: &str, specialization: &str, start: &str, end: &str) -> Professional {
        Professional::new(
            id,
            "Name",
            "Surname",
            specialization,
            DutyPeriod::new(start, end),
        )
    }

    #[test]
    fn test_smallest_id_wins_regardless_of_order() {
        let pros = vec![
            make_professional("b", "Cardiology", "2024-01-01", "2024-01-31"),
            make_professional("a", "Cardiology", "2024-01-01", "2024-01-31"),
        ];

        let pick = pick_on_duty(pros.iter(), "Cardiology", "2024-01-15").unwrap();
        assert_eq!(pick.id, "a");
    }

    #[test]
    fn test_duty_window_excludes_candidates() {
        let pros = vec![
            make_professional("a", "Cardiology", "2024-02-01", "2024-02-28"),
            make_professional("b", "Cardiology", "2024-01-01", "2024-01-31"),
        ];

        // "a" would win the tie-break but is off duty on the date.
        let pick = pick_on_duty(pros.iter(), "Cardiology", "2024-01-15").unwrap();
        assert_eq!(pick.id, "b");

        assert!(pick_on_duty(pros.iter(), "Cardiology", "2024-03-15").is_none());
        assert!(pick_on_duty(pros.iter(), "Neurology", "2024-01-15").is_none());
    }

    #[test]
    fn test_history_latest_assignment_wins() {
        let mut history = AssignmentHistory::new();
        history.record("X1", "a");
        history.record("X1", "b");
        history.record("X2", "a");

        assert_eq!(history.professional_for("X1"), Some("b"));
        assert_eq!(history.professional_for("X3"), None);
        assert_eq!(history.iter().count(), 2);
    }
}
