//! UI state transition logic
//!
//! Pure functions for cycling filter options, moving list selections, and
//! toast timing.

use crate::{ConsultationType, SortBy};

/// Cycle the consultation filter: None → Video Consult → In Clinic → None
///
/// # Examples
/// ```
/// use docfinder::ConsultationType;
/// use docfinder::logic::ui::cycle_consultation_type;
///
/// assert_eq!(cycle_consultation_type(None), Some(ConsultationType::VideoConsult));
/// assert_eq!(
///     cycle_consultation_type(Some(ConsultationType::VideoConsult)),
///     Some(ConsultationType::InClinic)
/// );
/// assert_eq!(cycle_consultation_type(Some(ConsultationType::InClinic)), None);
/// ```
pub fn cycle_consultation_type(current: Option<ConsultationType>) -> Option<ConsultationType> {
    match current {
        None => Some(ConsultationType::VideoConsult),
        Some(ConsultationType::VideoConsult) => Some(ConsultationType::InClinic),
        Some(ConsultationType::InClinic) => None,
    }
}

/// Cycle the sort order: None → Fees → Experience → None
pub fn cycle_sort_by(current: Option<SortBy>) -> Option<SortBy> {
    match current {
        None => Some(SortBy::Fees),
        Some(SortBy::Fees) => Some(SortBy::Experience),
        Some(SortBy::Experience) => None,
    }
}

/// Move a selection by `delta`, clamped to `0..len`
///
/// Returns None for an empty list.
pub fn move_selection(current: Option<usize>, len: usize, delta: isize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current.unwrap_or(0).min(len - 1) as isize;
    let next = (current + delta).clamp(0, len as isize - 1);
    Some(next as usize)
}

/// Toasts stay up long enough to read a shareable link
pub const TOAST_DURATION_MS: u128 = 3000;

/// Whether a toast shown `elapsed_ms` ago should be dismissed
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Keep a selection valid after the list it points into changed length
pub fn clamp_selection(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(current.unwrap_or(0).min(len - 1))
    }
}
