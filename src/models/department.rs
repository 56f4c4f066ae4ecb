//! Department model: a named pool of beds.
//!
//! Capacity is consumed, not revolving: hospitalizing a patient decrements
//! the free-bed count and nothing ever restores it. Occupants are tracked
//! by fiscal code; departments never own patient records.

use serde::{Deserialize, Serialize};

/// A hospital department with bounded bed capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    /// Department name, used as its registry key.
    pub name: String,
    /// Beds still free.
    pub free_beds: u32,
    /// Fiscal codes of hospitalized patients, in admission order.
    pub hospitalized: Vec<String>,
}

impl Department {
    /// Creates a department at full capacity with no occupants.
    pub fn new(name: impl Into<String>, max_patients: u32) -> Self {
        Self {
            name: name.into(),
            free_beds: max_patients,
            hospitalized: Vec::new(),
        }
    }

    /// Whether at least one bed is free.
    #[inline]
    pub fn has_available_beds(&self) -> bool {
        self.free_beds > 0
    }

    /// Takes in a patient, consuming one bed.
    ///
    /// Silent no-op when full: the placement decision belongs to the
    /// caller, which checks [`Self::has_available_beds`] first and takes
    /// the discharge path instead.
    pub fn hospitalize(&mut self, fiscal_code: impl Into<String>) {
        if self.has_available_beds() {
            self.hospitalized.push(fiscal_code.into());
            self.free_beds -= 1;
        }
    }

    /// Number of patients currently hospitalized here.
    #[inline]
    pub fn occupant_count(&self) -> usize {
        self.hospitalized.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_is_consumed() {
        let mut d = Department::new("Cardiology", 2);
        assert!(d.has_available_beds());

        d.hospitalize("A");
        d.hospitalize("B");
        assert_eq!(d.free_beds, 0);
        assert!(!d.has_available_beds());
        assert_eq!(d.occupant_count(), 2);
        assert_eq!(d.hospitalized, vec!["A", "B"]); // admission order
    }

    #[test]
    fn test_hospitalize_when_full_is_noop() {
        let mut d = Department::new("ER1", 1);
        d.hospitalize("A");
        d.hospitalize("B"); // no bed left
        assert_eq!(d.hospitalized, vec!["A"]);
        assert_eq!(d.free_beds, 0);
    }

    #[test]
    fn test_zero_capacity_department() {
        let mut d = Department::new("ER1", 0);
        assert!(!d.has_available_beds());
        d.hospitalize("A");
        assert!(d.hospitalized.is_empty());
    }
}
