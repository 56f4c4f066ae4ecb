//! Department registry: named bed pools.

use std::collections::BTreeMap;

use crate::error::{EmergencyError, EmergencyResult};
use crate::models::Department;

/// Owns every department, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct DepartmentRegistry {
    by_name: BTreeMap<String, Department>,
}

impl DepartmentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a department. Last write wins: re-registering a name
    /// resets it to full capacity with no occupants.
    pub fn insert(&mut self, department: Department) {
        if self.by_name.contains_key(&department.name) {
            tracing::warn!(name = %department.name, "replacing department record");
        }
        self.by_name.insert(department.name.clone(), department);
    }

    /// Looks up a department by name.
    pub fn get(&self, name: &str) -> EmergencyResult<&Department> {
        self.by_name.get(name).ok_or(EmergencyError::NotFound)
    }

    /// Mutable lookup, used by the lifecycle transition.
    pub fn get_mut(&mut self, name: &str) -> EmergencyResult<&mut Department> {
        self.by_name.get_mut(name).ok_or(EmergencyError::NotFound)
    }

    /// Iterates all departments in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Department> {
        self.by_name.values()
    }

    /// All department names, in order. `NotFound` when none registered.
    pub fn names(&self) -> EmergencyResult<Vec<String>> {
        if self.by_name.is_empty() {
            return Err(EmergencyError::NotFound);
        }
        Ok(self.by_name.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_resets_on_overwrite() {
        let mut reg = DepartmentRegistry::new();
        reg.insert(Department::new("Cardiology", 2));
        reg.get_mut("Cardiology").unwrap().hospitalize("X1");

        reg.insert(Department::new("Cardiology", 5));
        let d = reg.get("Cardiology").unwrap();
        assert_eq!(d.free_beds, 5);
        assert!(d.hospitalized.is_empty());
    }

    #[test]
    fn test_names() {
        let mut reg = DepartmentRegistry::new();
        assert!(matches!(reg.names(), Err(EmergencyError::NotFound)));

        reg.insert(Department::new("Surgery", 3));
        reg.insert(Department::new("Cardiology", 2));
        assert_eq!(reg.names().unwrap(), vec!["Cardiology", "Surgery"]);
    }
}
