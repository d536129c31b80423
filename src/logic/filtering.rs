//! Filtering Logic
//!
//! Pure functions that reduce a doctor list to the subset matching a
//! `FilterState`, then order it. All predicates are conjunctive.

use crate::api::Doctor;
use crate::logic::sorting::sort_doctors;
use crate::model::FilterState;
use crate::ConsultationType;

/// Case-insensitive substring match on the doctor's name
///
/// An empty query matches every name.
pub fn name_matches(query: &str, name: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Whether the doctor offers the requested consultation mode
pub fn consultation_matches(consultation_type: Option<ConsultationType>, doctor: &Doctor) -> bool {
    match consultation_type {
        None => true,
        Some(ConsultationType::VideoConsult) => doctor.video_consult,
        Some(ConsultationType::InClinic) => doctor.in_clinic,
    }
}

/// At least one of the doctor's specialties is selected
///
/// An empty selection matches everyone; a doctor without specialties never
/// matches a non-empty selection.
pub fn specialties_match(selected: &[String], doctor: &Doctor) -> bool {
    if selected.is_empty() {
        return true;
    }
    doctor
        .specialty_names()
        .any(|name| selected.iter().any(|s| s == name))
}

/// Check a single doctor against every active predicate
pub fn matches(doctor: &Doctor, state: &FilterState) -> bool {
    name_matches(&state.search, &doctor.name)
        && consultation_matches(state.consultation_type, doctor)
        && specialties_match(state.specialties(), doctor)
}

/// Filter then sort, returning a new list
///
/// # Arguments
/// - `doctors`: Full record set (not modified)
/// - `state`: Active filter selection
///
/// # Returns
/// Matching doctors, ordered by `state.sort_by` (input order when unset)
pub fn apply(doctors: &[Doctor], state: &FilterState) -> Vec<Doctor> {
    let mut visible: Vec<Doctor> = doctors
        .iter()
        .filter(|doctor| matches(doctor, state))
        .cloned()
        .collect();

    sort_doctors(&mut visible, state.sort_by);

    tracing::trace!(
        total = doctors.len(),
        visible = visible.len(),
        sort_by = ?state.sort_by,
        "applied filters"
    );

    visible
}
