//! Tests for loading the record set from a local source
//!
//! A load either yields the whole list or a banner explaining why not; the
//! session never starts with a partial list.

use std::io::Write;

use docfinder::api;
use docfinder::logic::errors::{classify_error, load_error_banner, ErrorType};
use docfinder::model::Model;

#[tokio::test]
async fn test_load_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[{{"id": 7, "name": "Dr. Anu", "fees": "₹ 500", "video_consult": true}}]"#
    )
    .expect("write fixture");

    let source = file.path().to_string_lossy().to_string();
    let doctors = api::load_doctors(&source).await.expect("loads");
    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0].id, "7");
    assert!(doctors[0].video_consult);
    assert!(!doctors[0].in_clinic);
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("doctors.json");

    let err = api::load_doctors(&missing.to_string_lossy())
        .await
        .expect_err("missing file fails");
    assert_eq!(classify_error(&err), ErrorType::NotFound);
    assert!(load_error_banner(&err).starts_with("Error loading doctors (source not found)"));
}

#[tokio::test]
async fn test_malformed_feed_leaves_session_empty() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{"doctors": "not a list"}}"#).expect("write fixture");

    let err = api::load_doctors(&file.path().to_string_lossy())
        .await
        .expect_err("object is not a doctor list");
    assert_eq!(classify_error(&err), ErrorType::InvalidData);

    let mut model = Model::new(false, 3, "http://localhost/doctors".to_string());
    model.set_load_error(load_error_banner(&err));
    assert!(model.directory.visible.is_empty());
    assert!(model.directory.error_message().is_some());
    assert!(model.suggestions().is_empty());
}
