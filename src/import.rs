//! Bulk CSV ingestion.
//!
//! Two intake feeds, both with a header line that is skipped and both
//! returning the number of records consumed:
//!
//! - professionals: `id,name,surname,specialization,"<start> to <end>"`
//! - departments: `name,capacity`
//!
//! Fields are trimmed. An unavailable source fails on the caller's side
//! when opening it, and `EmergencyError::Io` converts that error with
//! `?`. A record that fails to decode surfaces as `Import`, a
//! non-numeric capacity as `Field`. No feed failure ever panics the
//! core.

use std::io::Read;

use crate::center::EmergencyCenter;
use crate::error::EmergencyResult;

/// Loads the professional feed into the center.
///
/// Each record invokes the same registration path as
/// [`EmergencyCenter::add_professional`], so duplicate ids overwrite and
/// malformed duty periods degrade to the empty window.
pub fn load_professionals<R: Read>(
    input: R,
    center: &mut EmergencyCenter,
) -> EmergencyResult<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut consumed = 0;
    for record in reader.records() {
        let record = record?;
        center.add_professional(
            record.get(0).unwrap_or(""),
            record.get(1).unwrap_or(""),
            record.get(2).unwrap_or(""),
            record.get(3).unwrap_or(""),
            record.get(4).unwrap_or(""),
        );
        consumed += 1;
    }

    tracing::debug!(consumed, "professional feed loaded");
    Ok(consumed)
}

/// Loads the department feed into the center.
pub fn load_departments<R: Read>(
    input: R,
    center: &mut EmergencyCenter,
) -> EmergencyResult<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut consumed = 0;
    for record in reader.records() {
        let record = record?;
        let capacity: u32 = record.get(1).unwrap_or("").parse()?;
        center.add_department(record.get(0).unwrap_or(""), capacity);
        consumed += 1;
    }

    tracing::debug!(consumed, "department feed loaded");
    Ok(consumed)
}
