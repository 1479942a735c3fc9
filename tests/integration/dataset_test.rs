//! Integration tests for dataset loading

use lmpmap::{load_dataset, DatasetSource, LoadError};

use super::helpers::{fixtures_dir, temp_fixture, write_dataset};

#[test]
fn two_step_fixture_loads_in_order() {
    let source = DatasetSource::File(fixtures_dir().join("two_steps.json"));
    let dataset = load_dataset(&source).expect("Should load fixture");

    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.max_index(), 1);
    assert_eq!(dataset.get(0).unwrap().time, "t0");
    assert_eq!(dataset.get(1).unwrap().time, "t1");
    assert_eq!(dataset.record_count(), 2);
}

#[test]
fn empty_array_is_rejected() {
    let (_dir, path) = temp_fixture("empty.json");
    let err = load_dataset(&DatasetSource::File(path)).unwrap_err();
    assert!(matches!(err, LoadError::Empty));
}

#[test]
fn top_level_object_is_rejected() {
    let (_dir, path) = temp_fixture("object.json");
    let err = load_dataset(&DatasetSource::File(path)).unwrap_err();
    assert!(matches!(err, LoadError::NotAnArray));
}

#[test]
fn invalid_json_is_rejected() {
    let (_dir, path) = write_dataset("[{\"time\": \"t0\", ");
    let err = load_dataset(&DatasetSource::File(path)).unwrap_err();
    assert!(matches!(err, LoadError::Json(_)));
}

#[test]
fn missing_file_reports_io_error() {
    let source = DatasetSource::File(fixtures_dir().join("does_not_exist.json"));
    let err = load_dataset(&source).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("does_not_exist.json"));
}

#[test]
fn records_without_coordinates_are_kept_in_the_dataset() {
    let (_dir, path) = temp_fixture("missing_coords.json");
    let dataset = load_dataset(&DatasetSource::File(path)).unwrap();
    let step = dataset.get(0).unwrap();

    assert_eq!(step.records.len(), 4);
    assert_eq!(step.renderable_count(), 2);
}

#[test]
fn unreachable_url_reports_http_error() {
    // Port 9 (discard) on localhost is not expected to serve HTTP
    let source = DatasetSource::parse("http://127.0.0.1:9/data.json");
    let err = load_dataset(&source).unwrap_err();
    assert!(matches!(err, LoadError::Http { .. }));
}
