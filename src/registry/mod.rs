//! Keyed registries owning the domain entities.
//!
//! Each registry is an exclusive-owner `BTreeMap` from key to entity.
//! Ordered keys keep list queries deterministic and let the assignment
//! tie-break fall out of plain iteration order.
//!
//! Registration semantics differ on purpose and tests depend on both:
//! professionals and departments are **last-write-wins** (re-registering
//! replaces the record), while patients are **first-write-wins**
//! (re-admitting an existing fiscal code returns the stored record
//! unchanged).

mod departments;
mod patients;
mod professionals;
mod reports;

pub use departments::DepartmentRegistry;
pub use patients::PatientRegistry;
pub use professionals::ProfessionalRegistry;
pub use reports::ReportLog;
