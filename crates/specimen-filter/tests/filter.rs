//! Integration tests for the specimen filter engine.

use serde_json::json;
use specimen_filter::{FilterCriteria, FilterOutcome, filter_specimens};
use specimen_model::SpecimenRecord;

fn records(values: serde_json::Value) -> Vec<SpecimenRecord> {
    serde_json::from_value(values).expect("parse records")
}

fn ids<'a>(outcome: &FilterOutcome<'a>) -> Vec<&'a str> {
    outcome
        .records()
        .iter()
        .map(|&record| record.id.as_str())
        .collect()
}

fn mixed_collection() -> Vec<SpecimenRecord> {
    records(json!([
        { "id": "s1", "bar_code": "BC-1", "sample_data": { "family": "Smith", "state": "new", "type": "blood-dna" } },
        { "id": "s2", "bar_code": "BC-2", "sample_data": { "family": "Jones", "state": "lost", "type": "blood" } },
        { "id": "s3", "bar_code": "BC-3", "sample_data": { "family": "Smith", "state": "discarded", "type": "hair-rna-library" } },
        { "id": "s4", "bar_code": "BC-4", "sample_data": { "family": "smith", "state": "new" } },
        { "id": "s5", "bar_code": "bc-1", "sample_data": { "family": "Smith", "state": "lost", "type": "buccal-dna-amplicon" } },
        { "id": "s6", "bar_code": "BC-6", "sample_data": { "family": "Jones", "state": "psu", "type": "stool-dna" } }
    ]))
}

#[test]
fn no_criteria_returns_everything_in_order() {
    let collection = mixed_collection();
    let outcome = filter_specimens(Some(collection.as_slice()), &FilterCriteria::default());
    assert_eq!(ids(&outcome), ["s1", "s2", "s3", "s4", "s5", "s6"]);
    assert!(!outcome.is_subset_of(collection.len()));
}

#[test]
fn level_two_requires_a_second_level() {
    let collection = records(json!([
        { "id": "a", "bar_code": "A", "sample_data": { "type": "blood-dna" } },
        { "id": "b", "bar_code": "B", "sample_data": { "type": "blood" } },
        { "id": "c", "bar_code": "C", "sample_data": { "type": "hair-rna-library" } }
    ]));
    let criteria = FilterCriteria::new().with_type_level(2, ["dna"]);
    let outcome = filter_specimens(Some(collection.as_slice()), &criteria);
    assert_eq!(ids(&outcome), ["a"]);
}

#[test]
fn level_three_requires_a_third_level() {
    let collection = mixed_collection();
    let criteria = FilterCriteria::new().with_type_level(3, ["library", "amplicon"]);
    let outcome = filter_specimens(Some(collection.as_slice()), &criteria);
    assert_eq!(ids(&outcome), ["s3", "s5"]);
}

#[test]
fn state_set_preserves_relative_order() {
    let collection = mixed_collection();
    let criteria = FilterCriteria::new().with_states(["lost", "discarded"]);
    let outcome = filter_specimens(Some(collection.as_slice()), &criteria);
    assert_eq!(ids(&outcome), ["s2", "s3", "s5"]);
    assert!(outcome.is_subset_of(collection.len()));
}

#[test]
fn family_and_state_are_conjunctive() {
    let collection = mixed_collection();
    let criteria = FilterCriteria::new()
        .with_family("Smith")
        .with_states(["new"]);
    let outcome = filter_specimens(Some(collection.as_slice()), &criteria);
    assert_eq!(ids(&outcome), ["s1"]);
}

#[test]
fn empty_intersection_is_an_empty_match() {
    let collection = mixed_collection();
    let criteria = FilterCriteria::new()
        .with_family("Jones")
        .with_states(["discarded"]);
    let outcome = filter_specimens(Some(collection.as_slice()), &criteria);
    assert!(outcome.is_loaded());
    assert!(outcome.is_empty());
}

#[test]
fn bar_code_and_family_are_case_sensitive() {
    let collection = mixed_collection();
    let by_bar_code = FilterCriteria::new().with_bar_code("BC-1");
    assert_eq!(
        ids(&filter_specimens(Some(collection.as_slice()), &by_bar_code)),
        ["s1"]
    );
    let by_family = FilterCriteria::new().with_family("smith");
    assert_eq!(
        ids(&filter_specimens(Some(collection.as_slice()), &by_family)),
        ["s4"]
    );
}

#[test]
fn all_type_levels_combined() {
    let collection = mixed_collection();
    let criteria = FilterCriteria::new()
        .with_type_level(1, ["hair", "buccal"])
        .with_type_level(2, ["rna", "dna"])
        .with_type_level(3, ["amplicon"]);
    let outcome = filter_specimens(Some(collection.as_slice()), &criteria);
    assert_eq!(ids(&outcome), ["s5"]);
}

#[test]
fn inputs_are_not_modified() {
    let collection = mixed_collection();
    let snapshot = collection.clone();
    let criteria = FilterCriteria::new().with_states(["new"]);
    let criteria_snapshot = criteria.clone();

    let owned = filter_specimens(Some(collection.as_slice()), &criteria).to_owned_records();

    assert_eq!(collection, snapshot);
    assert_eq!(criteria, criteria_snapshot);
    assert_eq!(owned.as_ref().map(Vec::len), Some(2));
}

#[test]
fn criteria_load_from_toml() {
    let criteria: FilterCriteria = toml::from_str(
        r#"
family = "Smith"
states = ["new", "lost"]
type_level1 = ["blood", "buccal"]
"#,
    )
    .expect("parse criteria");

    let collection = mixed_collection();
    let outcome = filter_specimens(Some(collection.as_slice()), &criteria);
    assert_eq!(ids(&outcome), ["s1", "s5"]);
}

#[test]
fn criteria_accept_camel_case_json() {
    let criteria: FilterCriteria = serde_json::from_value(json!({
        "barCode": "BC-6",
        "typeLevel2": ["dna"]
    }))
    .expect("parse criteria");
    assert_eq!(criteria.bar_code(), Some("BC-6"));

    let unknown = serde_json::from_value::<FilterCriteria>(json!({ "colour": "red" }));
    assert!(unknown.is_err());
}
