//! Professional (staff) model.
//!
//! A professional is a member of the emergency-room staff: identity,
//! a free-text specialization tag, and the duty period during which they
//! can be matched to patients.

use serde::{Deserialize, Serialize};

use super::DutyPeriod;

/// A staff member registered with the emergency room.
///
/// Immutable after creation; re-registering the same id replaces the
/// record wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professional {
    /// Unique identifier, assigned by the caller.
    pub id: String,
    /// First name.
    pub name: String,
    /// Surname.
    pub surname: String,
    /// Free-text skill tag (matched exactly, case-sensitive).
    pub specialization: String,
    /// On-shift date interval.
    pub duty: DutyPeriod,
}

impl Professional {
    /// Creates a new professional.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        surname: impl Into<String>,
        specialization: impl Into<String>,
        duty: DutyPeriod,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            surname: surname.into(),
            specialization: specialization.into(),
            duty,
        }
    }

    /// Whether this professional is on duty on the given date.
    #[inline]
    pub fn is_on_duty(&self, date: &str) -> bool {
        self.duty.contains_date(date)
    }

    /// Whether this professional is on duty for the whole of `period`.
    #[inline]
    pub fn covers_period(&self, period: &DutyPeriod) -> bool {
        self.duty.covers(period)
    }
}
