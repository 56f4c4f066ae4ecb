//! Aggregate census over the intake state.
//!
//! Derives the reporting counts purely from registry contents plus the
//! assignment history; no other state feeds these numbers.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total patients | size of the patient registry |
//! | Admissions per date | patients grouped by admission date |
//! | Discharged | patients in the `Discharged` state |
//! | Hospitalized per department | occupant-list length per department |
//! | Discharged per specialization | discharged patients joined to their assigned professional's tag |

use std::collections::BTreeMap;

use crate::center::EmergencyCenter;
use crate::models::PatientStatus;

/// A point-in-time aggregate snapshot of the emergency room.
#[derive(Debug, Clone)]
pub struct Census {
    /// Total registered patients.
    pub total_patients: usize,
    /// Admission counts per admission date.
    pub admitted_by_date: BTreeMap<String, usize>,
    /// Patients currently in the `Discharged` state.
    pub discharged: usize,
    /// Occupant counts per department.
    pub hospitalized_by_department: BTreeMap<String, usize>,
    /// Discharged-patient counts per treating specialization.
    ///
    /// Only patients with a recorded assignment contribute.
    pub discharged_by_specialization: BTreeMap<String, usize>,
}

impl Census {
    /// Computes the snapshot in one pass over each registry.
    pub fn take(center: &EmergencyCenter) -> Self {
        let mut admitted_by_date: BTreeMap<String, usize> = BTreeMap::new();
        let mut discharged = 0;
        for patient in center.patients.iter() {
            *admitted_by_date.entry(patient.admitted_on.clone()).or_insert(0) += 1;
            if patient.status == PatientStatus::Discharged {
                discharged += 1;
            }
        }

        let hospitalized_by_department = center
            .departments
            .iter()
            .map(|d| (d.name.clone(), d.occupant_count()))
            .collect();

        let mut discharged_by_specialization: BTreeMap<String, usize> = BTreeMap::new();
        for (fiscal_code, professional_id) in center.assignments.iter() {
            let is_discharged = center
                .patients
                .get(fiscal_code)
                .map_or(false, |p| p.status == PatientStatus::Discharged);
            if !is_discharged {
                continue;
            }
            if let Ok(professional) = center.professionals.get(professional_id) {
                *discharged_by_specialization
                    .entry(professional.specialization.clone())
                    .or_insert(0) += 1;
            }
        }

        Self {
            total_patients: center.patients.len(),
            admitted_by_date,
            discharged,
            hospitalized_by_department,
            discharged_by_specialization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_census_snapshot() {
        let mut center = EmergencyCenter::new();
        center.add_professional("a", "Anna", "Bianchi", "Cardiology", "2024-01-01 to 2024-01-31");
        center.add_department("Full", 0);
        center.add_department("Open", 5);

        center.admit_patient("X1", "Mario", "Rossi", "1980-01-01", "chest pain", "2024-01-10");
        center.admit_patient("X2", "Anna", "Verdi", "1990-01-01", "arrhythmia", "2024-01-10");
        center.admit_patient("X3", "Gaia", "Neri", "1991-01-01", "fracture", "2024-01-12");

        center.assign_patient("X1", "Cardiology").unwrap();
        center.discharge_or_hospitalize("X1", "Full").unwrap();
        center.discharge_or_hospitalize("X2", "Open").unwrap();

        let census = Census::take(&center);
        assert_eq!(census.total_patients, 3);
        assert_eq!(census.admitted_by_date.get("2024-01-10"), Some(&2));
        assert_eq!(census.admitted_by_date.get("2024-01-12"), Some(&1));
        assert_eq!(census.discharged, 1);
        assert_eq!(census.hospitalized_by_department.get("Open"), Some(&1));
        assert_eq!(census.hospitalized_by_department.get("Full"), Some(&0));
        assert_eq!(census.discharged_by_specialization.get("Cardiology"), Some(&1));
    }

    #[test]
    fn test_empty_center_census() {
        let census = Census::take(&EmergencyCenter::new());
        assert_eq!(census.total_patients, 0);
        assert_eq!(census.discharged, 0);
        assert!(census.admitted_by_date.is_empty());
        assert!(census.hospitalized_by_department.is_empty());
        assert!(census.discharged_by_specialization.is_empty());
    }
}
