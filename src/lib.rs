//! Emergency-department patient flow engine.
//!
//! Models the intake workflow of a hospital emergency room: registering
//! staff and patients, matching patients to professionals by
//! specialization and duty period, allocating department bed capacity,
//! and filing sequentially numbered clinical reports.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Professional`, `Patient`, `Department`,
//!   `Report`, `DutyPeriod`
//! - **`registry`**: Keyed exclusive-owner stores for each entity
//! - **`assignment`**: Eligibility matching with a deterministic tie-break
//! - **`center`**: The `EmergencyCenter` facade and admission lifecycle
//! - **`census`**: One-pass aggregate snapshot of the intake state
//! - **`import`**: CSV bulk loaders for the staff and department feeds
//!
//! # Date Handling
//!
//! Dates stay the strings they arrived as and are compared
//! lexicographically. Inputs are ISO-8601-like, so string order equals
//! chronological order; that format is a contract with the caller, not
//! something the engine verifies.
//!
//! # Concurrency
//!
//! Single-threaded and in-memory. Operations check every precondition
//! before mutating, so observers never see half a transition; an
//! embedding that needs multiple callers should put one lock around the
//! whole [`EmergencyCenter`].

pub mod assignment;
pub mod census;
pub mod center;
pub mod error;
pub mod import;
pub mod models;
pub mod registry;

pub use assignment::AssignmentHistory;
pub use census::Census;
pub use center::EmergencyCenter;
pub use error::{EmergencyError, EmergencyResult};
pub use models::{Department, DutyPeriod, Patient, PatientStatus, Professional, Report};
pub use registry::{DepartmentRegistry, PatientRegistry, ProfessionalRegistry, ReportLog};
