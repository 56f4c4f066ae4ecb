//! Emergency-room facade.
//!
//! `EmergencyCenter` composes the four registries and the assignment
//! history, and hosts every operation that crosses registry boundaries:
//! patient-to-professional assignment, the placement decision, report
//! validation, and the aggregate queries.
//!
//! # Atomicity
//!
//! The core is single-threaded and in-memory: each operation completes
//! its precondition checks before mutating anything, so there is no
//! window where only half of a transition has happened. A multi-caller
//! embedding should wrap the whole center in one coarse lock.

use crate::assignment::{self, AssignmentHistory};
use crate::error::{EmergencyError, EmergencyResult};
use crate::models::{Department, DutyPeriod, Patient, PatientStatus, Professional, Report};
use crate::registry::{DepartmentRegistry, PatientRegistry, ProfessionalRegistry, ReportLog};

/// The emergency-room intake system.
///
/// # Example
///
/// ```
/// use ed_flow::{EmergencyCenter, PatientStatus};
///
/// let mut center = EmergencyCenter::new();
/// center.add_professional("P1", "Anna", "Bianchi", "Cardiology", "2024-03-01 to 2024-03-31");
/// center.add_department("Cardiology", 1);
/// center.admit_patient("X1", "Mario", "Rossi", "1980-01-01", "chest pain", "2024-03-05");
///
/// assert_eq!(center.assign_patient("X1", "Cardiology").unwrap(), "P1");
/// center.discharge_or_hospitalize("X1", "Cardiology").unwrap();
/// assert_eq!(center.verify_patient("X1").unwrap(), PatientStatus::Hospitalized);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmergencyCenter {
    /// Staff records.
    pub professionals: ProfessionalRegistry,
    /// Patient records.
    pub patients: PatientRegistry,
    /// Bed pools.
    pub departments: DepartmentRegistry,
    /// Clinical notes.
    pub reports: ReportLog,
    /// Patient-to-professional assignment record.
    pub assignments: AssignmentHistory,
}

impl EmergencyCenter {
    /// Creates an empty center.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------- registration -------------------------

    /// Registers a professional from raw intake fields.
    ///
    /// `period` is `"<start> to <end>"`; a malformed string degrades to
    /// the empty window, leaving the professional never on duty.
    /// Re-registering an id replaces the record.
    pub fn add_professional(
        &mut self,
        id: &str,
        name: &str,
        surname: &str,
        specialization: &str,
        period: &str,
    ) {
        let duty = DutyPeriod::parse(period).unwrap_or_else(DutyPeriod::empty);
        self.professionals
            .insert(Professional::new(id, name, surname, specialization, duty));
    }

    /// Registers a department with `max_patients` free beds.
    /// Re-registering a name resets it.
    pub fn add_department(&mut self, name: &str, max_patients: u32) {
        self.departments.insert(Department::new(name, max_patients));
    }

    /// Registers a patient, idempotently: an existing fiscal code keeps
    /// its stored record and that record is returned.
    pub fn admit_patient(
        &mut self,
        fiscal_code: &str,
        name: &str,
        surname: &str,
        birth_date: &str,
        reason: &str,
        admitted_on: &str,
    ) -> &Patient {
        self.patients.admit(Patient::new(
            fiscal_code,
            name,
            surname,
            birth_date,
            reason,
            admitted_on,
        ))
    }

    // --------------------------- queries ----------------------------

    /// Looks up a professional by id.
    pub fn professional_by_id(&self, id: &str) -> EmergencyResult<&Professional> {
        self.professionals.get(id)
    }

    /// Ids of professionals with the given specialization.
    pub fn professionals_with(&self, specialization: &str) -> EmergencyResult<Vec<String>> {
        self.professionals.ids_with_specialization(specialization)
    }

    /// Ids of professionals with the given specialization on duty for the
    /// whole of `period` (`"<start> to <end>"`). A malformed period can
    /// match nothing and is reported as `NotFound`.
    pub fn professionals_in_service(
        &self,
        specialization: &str,
        period: &str,
    ) -> EmergencyResult<Vec<String>> {
        let period = DutyPeriod::parse(period).ok_or(EmergencyError::NotFound)?;
        self.professionals.ids_in_service(specialization, &period)
    }

    /// All department names.
    pub fn departments(&self) -> EmergencyResult<Vec<String>> {
        self.departments.names()
    }

    /// Patients matching a fiscal code or surname.
    pub fn patients_matching(&self, identifier: &str) -> EmergencyResult<Vec<&Patient>> {
        self.patients.lookup(identifier)
    }

    /// Fiscal codes of patients admitted on a date, surname-then-name order.
    pub fn patients_admitted_on(&self, date: &str) -> Vec<String> {
        self.patients.admitted_on(date)
    }

    // ----------------------- assignment & care ----------------------

    /// Matches a patient to a professional by specialization and duty.
    ///
    /// Eligible professionals carry the exact specialization and are on
    /// duty on the patient's admission date; ties break to the
    /// lexicographically smallest id. The assignment is recorded in the
    /// history and the professional's id returned.
    pub fn assign_patient(
        &mut self,
        fiscal_code: &str,
        specialization: &str,
    ) -> EmergencyResult<String> {
        let admitted_on = self.patients.get(fiscal_code)?.admitted_on.clone();

        let pick = assignment::pick_on_duty(self.professionals.iter(), specialization, &admitted_on)
            .ok_or(EmergencyError::NotFound)?;
        let professional_id = pick.id.clone();

        tracing::debug!(
            patient = fiscal_code,
            professional = %professional_id,
            "assigned patient"
        );
        self.assignments.record(fiscal_code, professional_id.clone());
        Ok(professional_id)
    }

    /// Decides a patient's placement against a department.
    ///
    /// With a free bed the department takes the patient and the status
    /// becomes `Hospitalized`; otherwise the status becomes `Discharged`.
    /// Both outcomes are terminal: calling again on a settled patient is
    /// a no-op, so bed capacity is never consumed twice for one patient.
    pub fn discharge_or_hospitalize(
        &mut self,
        fiscal_code: &str,
        department_name: &str,
    ) -> EmergencyResult<()> {
        // Both keys must resolve before either side is touched.
        let department = self.departments.get_mut(department_name)?;
        let patient = self.patients.get_mut(fiscal_code)?;

        if patient.status.is_settled() {
            tracing::debug!(patient = fiscal_code, "placement already settled, ignoring");
            return Ok(());
        }

        if department.has_available_beds() {
            department.hospitalize(patient.fiscal_code.as_str());
            patient.status = PatientStatus::Hospitalized;
            tracing::debug!(patient = fiscal_code, department = department_name, "hospitalized");
        } else {
            patient.status = PatientStatus::Discharged;
            tracing::debug!(patient = fiscal_code, department = department_name, "discharged");
        }
        Ok(())
    }

    /// Classifies a patient's current lifecycle state.
    ///
    /// `PatientStatus::Admitted` is the explicit "neither hospitalized
    /// nor discharged" answer.
    pub fn verify_patient(&self, fiscal_code: &str) -> EmergencyResult<PatientStatus> {
        Ok(self.patients.get(fiscal_code)?.status)
    }

    /// Files a clinical report authored by a known professional.
    ///
    /// The patient is deliberately not validated: notes may reference
    /// patients that never completed registration.
    pub fn save_report(
        &mut self,
        professional_id: &str,
        fiscal_code: &str,
        date: &str,
        description: &str,
    ) -> EmergencyResult<&Report> {
        if !self.professionals.contains(professional_id) {
            return Err(EmergencyError::NotFound);
        }
        Ok(self
            .reports
            .append(professional_id, fiscal_code, date, description))
    }

    // -------------------------- aggregates --------------------------

    /// Total number of registered patients.
    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    /// Number of patients admitted on the given date.
    pub fn admitted_on_count(&self, date: &str) -> usize {
        self.patients.count_admitted_on(date)
    }

    /// Number of patients currently hospitalized in a department.
    pub fn hospitalized_count(&self, department_name: &str) -> EmergencyResult<usize> {
        Ok(self.departments.get(department_name)?.occupant_count())
    }

    /// Total number of discharged patients.
    pub fn discharged_count(&self) -> usize {
        self.patients.count_discharged()
    }

    /// Number of discharged patients whose assigned professional carries
    /// the given specialization. Joins the assignment history against
    /// both registries; patients never assigned do not count.
    pub fn discharged_treated_by_count(&self, specialization: &str) -> usize {
        self.assignments
            .iter()
            .filter(|(fiscal_code, professional_id)| {
                self.patients
                    .get(fiscal_code)
                    .map_or(false, |p| p.status == PatientStatus::Discharged)
                    && self
                        .professionals
                        .get(professional_id)
                        .map_or(false, |p| p.specialization == specialization)
            })
            .count()
    }
}
