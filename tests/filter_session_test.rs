//! End-to-end filter sessions against a realistic feed
//!
//! Drives the model the way the TUI does (filter changes, typing, back and
//! forward) and checks that the visible list, the canonical query and the
//! history stay in step.

use docfinder::api::{self, Doctor};
use docfinder::model::{HistoryMode, Model, PartialFilterState};
use docfinder::{ConsultationType, SortBy};

const FEED: &str = r#"[
    {"id": "1", "name": "Dr. Raj Kumar", "specialities": [{"name": "Dentist"}],
     "fees": "₹ 800", "experience": "13 Years of experience",
     "video_consult": true, "in_clinic": true},
    {"id": 2, "name": "Dr. Ravi Shah", "specialities": [{"name": "ENT"}, {"name": "Dentist"}],
     "fees": "₹ 1,200", "experience": "20 Years of experience",
     "video_consult": false, "in_clinic": true},
    {"id": "3", "name": "Dr. Anu Menon", "specialities": [{"name": "Dermatologist"}],
     "fees": "₹ 500", "experience": null,
     "video_consult": true, "in_clinic": false},
    {"id": "4", "name": "Dr. Meera Rao", "specialities": null,
     "fees": null, "experience": "8 Years of experience",
     "video_consult": null, "in_clinic": true}
]"#;

fn session() -> Model {
    let doctors = api::parse_doctors(FEED).expect("fixture parses");
    let mut model = Model::new(false, 3, "https://example.test/doctors".to_string());
    model.set_doctors(doctors);
    model
}

fn visible_ids(model: &Model) -> Vec<&str> {
    model.directory.visible.iter().map(|d| d.id.as_str()).collect()
}

#[test]
fn test_feed_derives_sorted_specialties() {
    let model = session();
    assert_eq!(
        model.directory.specialties,
        vec!["Dentist", "Dermatologist", "ENT"]
    );
    assert_eq!(visible_ids(&model), vec!["1", "2", "3", "4"]);
}

#[test]
fn test_fee_sort_reads_thousands_separator_and_missing_fee() {
    let mut model = session();
    model.update_filters(&PartialFilterState::sort_by(Some(SortBy::Fees)), HistoryMode::Push);
    // Missing fee counts as 0; ₹ 1,200 is 1200
    assert_eq!(visible_ids(&model), vec!["4", "3", "1", "2"]);
}

#[test]
fn test_experience_sort_is_descending() {
    let mut model = session();
    model.update_filters(
        &PartialFilterState::sort_by(Some(SortBy::Experience)),
        HistoryMode::Push,
    );
    assert_eq!(visible_ids(&model), vec!["2", "1", "4", "3"]);
}

#[test]
fn test_filters_are_conjunctive() {
    let mut model = session();
    model.update_filters(
        &PartialFilterState::specialties(vec!["Dentist".to_string()]),
        HistoryMode::Push,
    );
    assert_eq!(visible_ids(&model), vec!["1", "2"]);

    model.update_filters(
        &PartialFilterState::consultation_type(Some(ConsultationType::VideoConsult)),
        HistoryMode::Push,
    );
    assert_eq!(visible_ids(&model), vec!["1"]);

    model.update_filters(&PartialFilterState::search("ravi"), HistoryMode::Push);
    assert!(model.directory.visible.is_empty());
    assert_eq!(
        model.current_query(),
        "search=ravi&consultationType=Video+Consult&specialty=Dentist"
    );
}

#[test]
fn test_doctor_without_specialties_only_matches_unfiltered() {
    let mut model = session();
    assert!(visible_ids(&model).contains(&"4"));
    model.update_filters(
        &PartialFilterState::specialties(vec!["ENT".to_string(), "Dentist".to_string()]),
        HistoryMode::Push,
    );
    assert_eq!(visible_ids(&model), vec!["1", "2"]);
}

#[test]
fn test_back_and_forward_replay_selections() {
    let mut model = session();
    model.update_filters(
        &PartialFilterState::consultation_type(Some(ConsultationType::InClinic)),
        HistoryMode::Push,
    );
    model.update_filters(&PartialFilterState::sort_by(Some(SortBy::Fees)), HistoryMode::Push);
    model.update_filters(&PartialFilterState::search("r"), HistoryMode::Push);
    model.update_filters(&PartialFilterState::search("ra"), HistoryMode::Replace);
    assert_eq!(model.history.position(), (4, 4));
    assert_eq!(visible_ids(&model), vec!["4", "1", "2"]);

    assert!(model.navigate_back());
    assert_eq!(model.filters.search, "");
    assert_eq!(model.filters.sort_by, Some(SortBy::Fees));

    assert!(model.navigate_back());
    assert_eq!(model.filters.sort_by, None);
    assert_eq!(visible_ids(&model), vec!["1", "2", "4"]);

    assert!(model.navigate_forward());
    assert!(model.navigate_forward());
    assert_eq!(model.filters.search, "ra");
    assert!(!model.navigate_forward());
}

#[test]
fn test_new_change_after_back_drops_forward_entries() {
    let mut model = session();
    model.update_filters(&PartialFilterState::sort_by(Some(SortBy::Fees)), HistoryMode::Push);
    model.update_filters(&PartialFilterState::search("anu"), HistoryMode::Push);
    model.navigate_back();

    model.update_filters(
        &PartialFilterState::sort_by(Some(SortBy::Experience)),
        HistoryMode::Push,
    );
    assert_eq!(model.history.position(), (3, 3));
    assert!(!model.history.can_go_forward());
    assert_eq!(model.current_query(), "sortBy=experience");
}

#[test]
fn test_shared_link_rebuilds_session() {
    let mut original = session();
    original.update_filters(
        &PartialFilterState::specialties(vec!["ENT".to_string(), "Dentist".to_string()]),
        HistoryMode::Push,
    );
    original.update_filters(&PartialFilterState::sort_by(Some(SortBy::Fees)), HistoryMode::Push);
    let link = original.shareable_url();

    let mut other = session();
    other.restore_from_query(&link);
    assert_eq!(other.filters, original.filters);
    assert_eq!(visible_ids(&other), visible_ids(&original));
    assert_eq!(other.history.position(), (1, 1));
}

#[test]
fn test_suggestions_cap_and_order() {
    let mut model = session();
    model.update_filters(&PartialFilterState::search("dr."), HistoryMode::Push);
    let names: Vec<String> = model.suggestions().into_iter().map(|d: Doctor| d.name).collect();
    assert_eq!(
        names,
        vec!["Dr. Raj Kumar", "Dr. Ravi Shah", "Dr. Anu Menon"]
    );
}
