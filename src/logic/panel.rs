//! Filter panel logic
//!
//! The filter panel is a flat list of rows: a header per section, the
//! options under each expanded section, and a "Clear" row when the section
//! has an active value. Activating a row either folds a section or produces
//! a `PartialFilterState` to overlay onto the current filters.

use crate::model::{FilterState, PartialFilterState};
use crate::{ConsultationType, SortBy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSection {
    ConsultationMode,
    Specialty,
    Sort,
}

impl FilterSection {
    pub fn title(&self) -> &'static str {
        match self {
            FilterSection::ConsultationMode => "Consultation Mode",
            FilterSection::Specialty => "Speciality",
            FilterSection::Sort => "Sort By",
        }
    }
}

/// Which panel sections are unfolded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionVisibility {
    pub consultation_mode: bool,
    pub specialty: bool,
    pub sort: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self {
            consultation_mode: true,
            specialty: true,
            sort: true,
        }
    }
}

impl SectionVisibility {
    pub fn is_expanded(&self, section: FilterSection) -> bool {
        match section {
            FilterSection::ConsultationMode => self.consultation_mode,
            FilterSection::Specialty => self.specialty,
            FilterSection::Sort => self.sort,
        }
    }

    pub fn toggled(&self, section: FilterSection) -> Self {
        let mut next = *self;
        match section {
            FilterSection::ConsultationMode => next.consultation_mode = !next.consultation_mode,
            FilterSection::Specialty => next.specialty = !next.specialty,
            FilterSection::Sort => next.sort = !next.sort,
        }
        next
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelRow {
    Header(FilterSection),
    Consultation(ConsultationType),
    ClearConsultation,
    Specialty(String),
    ClearSpecialties,
    Sort(SortBy),
    ClearSort,
}

impl PanelRow {
    /// Whether the row's option is currently selected (radio/checkbox state)
    pub fn is_checked(&self, filters: &FilterState) -> bool {
        match self {
            PanelRow::Consultation(value) => filters.consultation_type == Some(*value),
            PanelRow::Specialty(label) => filters.has_specialty(label),
            PanelRow::Sort(value) => filters.sort_by == Some(*value),
            _ => false,
        }
    }
}

/// What activating a row should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    ToggleSection(FilterSection),
    Update(PartialFilterState),
}

/// Build the visible rows for the current filters and fold state
pub fn panel_rows(
    specialties: &[String],
    filters: &FilterState,
    visibility: &SectionVisibility,
) -> Vec<PanelRow> {
    let mut rows = vec![PanelRow::Header(FilterSection::ConsultationMode)];
    if visibility.consultation_mode {
        rows.push(PanelRow::Consultation(ConsultationType::VideoConsult));
        rows.push(PanelRow::Consultation(ConsultationType::InClinic));
        if filters.consultation_type.is_some() {
            rows.push(PanelRow::ClearConsultation);
        }
    }

    rows.push(PanelRow::Header(FilterSection::Specialty));
    if visibility.specialty {
        rows.extend(specialties.iter().cloned().map(PanelRow::Specialty));
        if !filters.specialties().is_empty() {
            rows.push(PanelRow::ClearSpecialties);
        }
    }

    rows.push(PanelRow::Header(FilterSection::Sort));
    if visibility.sort {
        rows.push(PanelRow::Sort(SortBy::Fees));
        rows.push(PanelRow::Sort(SortBy::Experience));
        if filters.sort_by.is_some() {
            rows.push(PanelRow::ClearSort);
        }
    }

    rows
}

/// Resolve a row activation against the current filters
///
/// Radio rows select their value, specialty rows toggle membership, and
/// the clear rows reset their section.
pub fn activate_row(row: &PanelRow, filters: &FilterState) -> PanelAction {
    match row {
        PanelRow::Header(section) => PanelAction::ToggleSection(*section),
        PanelRow::Consultation(value) => {
            PanelAction::Update(PartialFilterState::consultation_type(Some(*value)))
        }
        PanelRow::ClearConsultation => {
            PanelAction::Update(PartialFilterState::consultation_type(None))
        }
        PanelRow::Specialty(label) => {
            let toggled = filters.with_specialty_toggled(label);
            PanelAction::Update(PartialFilterState::specialties(
                toggled.specialties().to_vec(),
            ))
        }
        PanelRow::ClearSpecialties => PanelAction::Update(PartialFilterState::specialties(Vec::new())),
        PanelRow::Sort(value) => PanelAction::Update(PartialFilterState::sort_by(Some(*value))),
        PanelRow::ClearSort => PanelAction::Update(PartialFilterState::sort_by(None)),
    }
}
