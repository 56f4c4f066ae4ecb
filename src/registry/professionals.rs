//! Professional registry: staff lookup by id, specialization, and service
//! period.

use std::collections::BTreeMap;

use crate::error::{EmergencyError, EmergencyResult};
use crate::models::{DutyPeriod, Professional};

/// Owns every registered professional, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ProfessionalRegistry {
    by_id: BTreeMap<String, Professional>,
}

impl ProfessionalRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a professional. Last write wins: an existing record under
    /// the same id is replaced.
    pub fn insert(&mut self, professional: Professional) {
        if self.by_id.contains_key(&professional.id) {
            tracing::warn!(id = %professional.id, "replacing professional record");
        }
        self.by_id.insert(professional.id.clone(), professional);
    }

    /// Looks up a professional by id.
    pub fn get(&self, id: &str) -> EmergencyResult<&Professional> {
        self.by_id.get(id).ok_or(EmergencyError::NotFound)
    }

    /// Whether a professional with this id is registered.
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Iterates all professionals in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Professional> {
        self.by_id.values()
    }

    /// Ids of professionals with exactly this specialization, in id order.
    ///
    /// Matching is case-sensitive with no normalization.
    pub fn ids_with_specialization(&self, specialization: &str) -> EmergencyResult<Vec<String>> {
        let ids: Vec<String> = self
            .iter()
            .filter(|p| p.specialization == specialization)
            .map(|p| p.id.clone())
            .collect();

        if ids.is_empty() {
            return Err(EmergencyError::NotFound);
        }
        Ok(ids)
    }

    /// Ids of professionals with this specialization whose duty window
    /// covers the whole query period, in id order.
    pub fn ids_in_service(
        &self,
        specialization: &str,
        period: &DutyPeriod,
    ) -> EmergencyResult<Vec<String>> {
        let ids: Vec<String> = self
            .iter()
            .filter(|p| p.specialization == specialization && p.covers_period(period))
            .map(|p| p.id.clone())
            .collect();

        if ids.is_empty() {
            return Err(EmergencyError::NotFound);
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_insert_overwrites() {
        let mut reg = ProfessionalRegistry::new();
        reg.insert(make_professional("P1", "Cardiology", "2024-01-01", "2024-01-31"));
        reg.insert(make_professional("P1", "Neurology", "2024-02-01", "2024-02-28"));

        assert_eq!(reg.get("P1").unwrap().specialization, "Neurology");
    }

    #[test]
    fn test_get_unknown_is_not_found() {
        let reg = ProfessionalRegistry::new();
        assert!(matches!(reg.get("nope"), Err(EmergencyError::NotFound)));
    }

    #[test]
    fn test_specialization_filter_is_exact_and_ordered() {
        let mut reg = ProfessionalRegistry::new();
        reg.insert(make_professional("P3", "Cardiology", "2024-01-01", "2024-01-31"));
        reg.insert(make_professional("P1", "Cardiology", "2024-01-01", "2024-01-31"));
        reg.insert(make_professional("P2", "cardiology", "2024-01-01", "2024-01-31"));

        let ids = reg.ids_with_specialization("Cardiology").unwrap();
        assert_eq!(ids, vec!["P1", "P3"]); // case-sensitive, id order

        assert!(reg.ids_with_specialization("Dermatology").is_err());
    }

    #[test]
    fn test_in_service_requires_full_containment() {
        let mut reg = ProfessionalRegistry::new();
        reg.insert(make_professional("P1", "Cardiology", "2024-01-01", "2024-01-31"));

        let inside = DutyPeriod::new("2024-01-10", "2024-01-20");
        let straddling = DutyPeriod::new("2024-01-20", "2024-02-10");

        assert_eq!(reg.ids_in_service("Cardiology", &inside).unwrap(), vec!["P1"]);
        assert!(reg.ids_in_service("Cardiology", &straddling).is_err());
    }
}
