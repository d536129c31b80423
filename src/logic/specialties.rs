//! Specialty universe
//!
//! Derives the option list for the specialty filter from a record set.

use std::collections::BTreeSet;

use crate::api::Doctor;

/// Every distinct specialty label across `doctors`, sorted ascending
///
/// Empty labels are skipped. Recompute whenever the record set changes.
pub fn all_specialties(doctors: &[Doctor]) -> Vec<String> {
    let labels: BTreeSet<&str> = doctors
        .iter()
        .flat_map(|doctor| doctor.specialty_names())
        .filter(|name| !name.is_empty())
        .collect();

    labels.into_iter().map(str::to_string).collect()
}
