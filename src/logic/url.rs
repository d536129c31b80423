//! URL Codec
//!
//! Maps a `FilterState` to a query string and back. The query is always
//! regenerated from the state, never patched, so nothing from a previous
//! selection survives an encode.
//!
//! Parameters:
//! - `search`: free text
//! - `consultationType`: "Video Consult" | "In Clinic"
//! - `specialty`: repeated, one per selected label in canonical order
//! - `sortBy`: "fees" | "experience"

use std::borrow::Cow;

use crate::model::{FilterState, PartialFilterState};
use crate::{ConsultationType, SortBy};

pub const PARAM_SEARCH: &str = "search";
pub const PARAM_CONSULTATION_TYPE: &str = "consultationType";
pub const PARAM_SPECIALTY: &str = "specialty";
pub const PARAM_SORT_BY: &str = "sortBy";

/// Form-encode a single key or value (space becomes `+`)
fn encode_component(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

/// Decode a single form-encoded key or value
///
/// Invalid UTF-8 after percent-decoding is replaced rather than rejected.
fn decode_component(value: &str) -> String {
    let spaced: Cow<'_, str> = if value.contains('+') {
        Cow::Owned(value.replace('+', " "))
    } else {
        Cow::Borrowed(value)
    };
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

/// Split a query string into decoded `(key, value)` pairs in order
///
/// A leading `?` is ignored, empty segments are skipped, and a segment
/// without `=` yields an empty value.
pub fn parse_pairs(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);

    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(segment), String::new()),
        })
        .collect()
}

/// Serialize the non-default fields of `state`
///
/// # Examples
/// ```
/// use docfinder::logic::url::encode;
/// use docfinder::model::FilterState;
/// use docfinder::{ConsultationType, SortBy};
///
/// let state = FilterState::new(
///     "raj",
///     Some(ConsultationType::VideoConsult),
///     vec!["Dentist".to_string(), "ENT".to_string()],
///     Some(SortBy::Fees),
/// );
/// assert_eq!(
///     encode(&state),
///     "search=raj&consultationType=Video+Consult&specialty=Dentist&specialty=ENT&sortBy=fees"
/// );
/// assert_eq!(encode(&FilterState::default()), "");
/// ```
pub fn encode(state: &FilterState) -> String {
    let mut pairs: Vec<(&str, &str)> = Vec::new();

    if !state.search.is_empty() {
        pairs.push((PARAM_SEARCH, &state.search));
    }
    if let Some(consultation_type) = state.consultation_type {
        pairs.push((PARAM_CONSULTATION_TYPE, consultation_type.as_str()));
    }
    for specialty in state.specialties() {
        pairs.push((PARAM_SPECIALTY, specialty));
    }
    if let Some(sort_by) = state.sort_by {
        pairs.push((PARAM_SORT_BY, sort_by.as_str()));
    }

    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Read whichever fields are present in `query`
///
/// Missing, empty, or unrecognized values leave the field unset. For the
/// single-valued fields the first occurrence wins; every `specialty` is kept
/// in order of appearance. Never fails.
pub fn decode(query: &str) -> PartialFilterState {
    let mut partial = PartialFilterState::default();
    let mut specialties: Vec<String> = Vec::new();

    for (key, value) in parse_pairs(query) {
        match key.as_str() {
            PARAM_SEARCH => {
                if partial.search.is_none() && !value.is_empty() {
                    partial.search = Some(value);
                }
            }
            PARAM_CONSULTATION_TYPE => {
                if partial.consultation_type.is_none() {
                    if let Some(parsed) = ConsultationType::from_param(&value) {
                        partial.consultation_type = Some(Some(parsed));
                    }
                }
            }
            PARAM_SPECIALTY => {
                if !value.is_empty() && !specialties.contains(&value) {
                    specialties.push(value);
                }
            }
            PARAM_SORT_BY => {
                if partial.sort_by.is_none() {
                    if let Some(parsed) = SortBy::from_param(&value) {
                        partial.sort_by = Some(Some(parsed));
                    }
                }
            }
            other => {
                tracing::trace!(param = other, "ignoring unknown query parameter");
            }
        }
    }

    if !specialties.is_empty() {
        partial.specialties = Some(specialties);
    }

    tracing::debug!(?partial, "decoded query string");
    partial
}

/// Query portion of a full URL (after the first `?`, without any fragment)
///
/// A bare query string is returned unchanged.
pub fn split_query(url: &str) -> &str {
    let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
    match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None if without_fragment.contains('=') => without_fragment,
        None => "",
    }
}

/// Shareable URL for `state` rooted at `base`
pub fn encode_url(base: &str, state: &FilterState) -> String {
    let query = encode(state);
    if query.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}", base, query)
    }
}
