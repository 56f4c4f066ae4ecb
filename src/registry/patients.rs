//! Patient registry: admission records and date-based queries.

use std::collections::BTreeMap;

use crate::error::{EmergencyError, EmergencyResult};
use crate::models::{Patient, PatientStatus};

/// Owns every registered patient, keyed by fiscal code.
#[derive(Debug, Clone, Default)]
pub struct PatientRegistry {
    by_code: BTreeMap<String, Patient>,
}

impl PatientRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a patient, idempotently.
    ///
    /// First write wins: re-admitting an existing fiscal code leaves the
    /// stored record unchanged and returns it. Asymmetric with
    /// professional registration, which overwrites.
    pub fn admit(&mut self, patient: Patient) -> &Patient {
        self.by_code
            .entry(patient.fiscal_code.clone())
            .or_insert(patient)
    }

    /// Looks up a patient by fiscal code.
    pub fn get(&self, fiscal_code: &str) -> EmergencyResult<&Patient> {
        self.by_code.get(fiscal_code).ok_or(EmergencyError::NotFound)
    }

    /// Mutable lookup, used by the lifecycle transition.
    pub fn get_mut(&mut self, fiscal_code: &str) -> EmergencyResult<&mut Patient> {
        self.by_code
            .get_mut(fiscal_code)
            .ok_or(EmergencyError::NotFound)
    }

    /// Whether a patient with this fiscal code is registered.
    #[inline]
    pub fn contains(&self, fiscal_code: &str) -> bool {
        self.by_code.contains_key(fiscal_code)
    }

    /// Iterates all patients in fiscal-code order.
    pub fn iter(&self) -> impl Iterator<Item = &Patient> {
        self.by_code.values()
    }

    /// Patients matching an identifier that is either a fiscal code or a
    /// surname.
    pub fn lookup(&self, identifier: &str) -> EmergencyResult<Vec<&Patient>> {
        let matches: Vec<&Patient> = self
            .iter()
            .filter(|p| p.fiscal_code == identifier || p.surname == identifier)
            .collect();

        if matches.is_empty() {
            return Err(EmergencyError::NotFound);
        }
        Ok(matches)
    }

    /// Fiscal codes of patients admitted on the given date, ordered by
    /// surname then name. Empty when none match.
    pub fn admitted_on(&self, date: &str) -> Vec<String> {
        let mut admitted: Vec<&Patient> =
            self.iter().filter(|p| p.admitted_on == date).collect();
        admitted.sort_by(|a, b| a.surname.cmp(&b.surname).then_with(|| a.name.cmp(&b.name)));
        admitted.into_iter().map(|p| p.fiscal_code.clone()).collect()
    }

    /// Total number of registered patients.
    #[inline]
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Whether the registry is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Number of patients admitted on the given date.
    pub fn count_admitted_on(&self, date: &str) -> usize {
        self.iter().filter(|p| p.admitted_on == date).count()
    }

    /// Number of patients in the `Discharged` state.
    pub fn count_discharged(&self) -> usize {
        self.iter()
            .filter(|p| p.status == PatientStatus::Discharged)
            .count()
    }
}
