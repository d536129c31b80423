//! Filter State
//!
//! The user's current search/filter/sort selection. Values are never mutated
//! in place: every change produces a new `FilterState` through `overlay`.

use crate::{ConsultationType, SortBy};

/// Complete filter selection
///
/// `specialties` keeps insertion order (the canonical order used when the
/// state is written to a query string) and never holds duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub consultation_type: Option<ConsultationType>,
    specialties: Vec<String>,
    pub sort_by: Option<SortBy>,
}

/// A sparse update to a `FilterState`
///
/// `None` leaves the field alone. For the nullable fields the inner option
/// distinguishes "set to this value" from "clear back to unset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialFilterState {
    pub search: Option<String>,
    pub consultation_type: Option<Option<ConsultationType>>,
    pub specialties: Option<Vec<String>>,
    pub sort_by: Option<Option<SortBy>>,
}

fn dedup_preserving_order<I>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = Vec::new();
    for label in labels {
        if !label.is_empty() && !out.contains(&label) {
            out.push(label);
        }
    }
    out
}

impl FilterState {
    pub fn new(
        search: impl Into<String>,
        consultation_type: Option<ConsultationType>,
        specialties: Vec<String>,
        sort_by: Option<SortBy>,
    ) -> Self {
        Self {
            search: search.into(),
            consultation_type,
            specialties: dedup_preserving_order(specialties),
            sort_by,
        }
    }

    /// Selected specialties in canonical order
    pub fn specialties(&self) -> &[String] {
        &self.specialties
    }

    pub fn has_specialty(&self, label: &str) -> bool {
        self.specialties.iter().any(|s| s == label)
    }

    /// True when nothing is selected
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Apply a partial update, keeping every field the update leaves unset
    pub fn overlay(&self, partial: &PartialFilterState) -> Self {
        Self {
            search: partial
                .search
                .clone()
                .unwrap_or_else(|| self.search.clone()),
            consultation_type: partial
                .consultation_type
                .unwrap_or(self.consultation_type),
            specialties: match &partial.specialties {
                Some(labels) => dedup_preserving_order(labels.iter().cloned()),
                None => self.specialties.clone(),
            },
            sort_by: partial.sort_by.unwrap_or(self.sort_by),
        }
    }

    /// Add the label if it is not selected, remove it if it is
    pub fn with_specialty_toggled(&self, label: &str) -> Self {
        let specialties = if self.has_specialty(label) {
            self.specialties
                .iter()
                .filter(|s| s.as_str() != label)
                .cloned()
                .collect()
        } else {
            let mut next = self.specialties.clone();
            next.push(label.to_string());
            next
        };
        self.overlay(&PartialFilterState::specialties(specialties))
    }
}

impl PartialFilterState {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search: Some(query.into()),
            ..Default::default()
        }
    }

    pub fn consultation_type(value: Option<ConsultationType>) -> Self {
        Self {
            consultation_type: Some(value),
            ..Default::default()
        }
    }

    pub fn specialties(labels: Vec<String>) -> Self {
        Self {
            specialties: Some(labels),
            ..Default::default()
        }
    }

    pub fn sort_by(value: Option<SortBy>) -> Self {
        Self {
            sort_by: Some(value),
            ..Default::default()
        }
    }
}
