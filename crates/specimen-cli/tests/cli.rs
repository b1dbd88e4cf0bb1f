//! Tests for collection loading and rendering.

use std::fs;
use std::path::PathBuf;

use specimen_cli::input::{load_collection, load_criteria};
use specimen_cli::render::{issues_table, records_json, records_table, type_levels_table};
use specimen_filter::{FilterOutcome, filter_specimens};
use specimen_model::{SpecimenRecord, validate_record};
use tempfile::TempDir;

const COLLECTION: &str = r#"[
  { "id": "s1", "bar_code": "BC-1", "sample_data": { "family": "Smith", "state": "new", "type": "blood-dna", "location": "fridge_1-shelf_2-rack_3-box_4-spot_A7" } },
  { "id": "s2", "bar_code": "BC-2", "sample_data": { "family": "Jones", "state": "lost", "type": "stool" } },
  { "id": "s3", "bar_code": "BC-3", "sample_data": { "family": "Smith", "state": "shipped", "type": "blood-dna", "location": "fridge_1-shelf_2" } }
]"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn collection() -> Vec<SpecimenRecord> {
    serde_json::from_str(COLLECTION).expect("parse collection")
}

#[test]
fn loads_collection_and_null() {
    let dir = TempDir::new().expect("temp dir");
    let records = load_collection(&write(&dir, "records.json", COLLECTION)).expect("load");
    assert_eq!(records.as_ref().map(Vec::len), Some(3));

    let not_loaded = load_collection(&write(&dir, "null.json", "null")).expect("load null");
    assert!(not_loaded.is_none());
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().expect("temp dir");
    let error = load_collection(&dir.path().join("absent.json")).unwrap_err();
    assert!(format!("{error:#}").contains("absent.json"));
}

#[test]
fn criteria_file_drives_filter() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(
        &dir,
        "criteria.toml",
        "family = \"Smith\"\ntype_level2 = [\"dna\"]\n",
    );
    let criteria = load_criteria(&path).expect("load criteria");
    let records = collection();
    let outcome = filter_specimens(Some(records.as_slice()), &criteria);
    let ids: Vec<&str> = outcome
        .records()
        .iter()
        .map(|&record| record.id.as_str())
        .collect();
    assert_eq!(ids, ["s1", "s3"]);
}

#[test]
fn unknown_criteria_key_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(&dir, "criteria.toml", "colour = \"red\"\n");
    let error = load_criteria(&path).unwrap_err();
    assert!(format!("{error:#}").contains("criteria.toml"));
}

#[test]
fn records_table_shows_decoded_location() {
    let records = collection();
    let selected: Vec<&SpecimenRecord> = records.iter().collect();
    let rendered = records_table(&selected).to_string();
    assert!(rendered.contains("Bar code"));
    assert!(rendered.contains("1 / 2 / 3 / 4 / A7"));
    assert!(rendered.contains("fridge_1-shelf_2"));
    assert!(rendered.contains("stool"));
}

#[test]
fn type_levels_are_numbered() {
    let levels = vec!["hair".to_string(), "rna".to_string()];
    let rendered = type_levels_table(&levels).to_string();
    assert!(rendered.contains("hair"));
    assert!(rendered.contains("rna"));
    assert!(rendered.contains('2'));
}

#[test]
fn matched_records_render_as_json() {
    let records = collection();
    let criteria = specimen_filter::FilterCriteria::new().with_states(["lost"]);
    let FilterOutcome::Matched(matched) = filter_specimens(Some(records.as_slice()), &criteria)
    else {
        panic!("collection is loaded");
    };
    let json = records_json(&matched).expect("serialize");
    insta::assert_snapshot!(json, @r#"
    [
      {
        "id": "s2",
        "bar_code": "BC-2",
        "sample_data": {
          "family": "Jones",
          "state": "lost",
          "type": "stool",
          "genotype_flag": false,
          "haplotype_flag": false,
          "sanger_seq_flag": false,
          "ngs_seg_flag": false,
          "dd_pcr_flag": false
        }
      }
    ]
    "#);
}

#[test]
fn validation_issues_render_per_specimen() {
    let records = collection();
    let issues: Vec<_> = records
        .iter()
        .flat_map(|record| {
            validate_record(record)
                .into_iter()
                .map(move |issue| (record, issue))
        })
        .collect();
    let fields: Vec<(&str, &str)> = issues
        .iter()
        .map(|(record, issue)| (record.id.as_str(), issue.field.as_str()))
        .collect();
    assert_eq!(
        fields,
        [
            ("s3", "sample_data.state"),
            ("s3", "sample_data.location")
        ]
    );

    let message = &issues[0].1.message;
    assert!(message.starts_with("unknown specimen state: shipped"));
    let rendered = issues_table(&issues).to_string();
    assert!(rendered.contains("Specimen"));
    assert!(rendered.contains("s3"));
}
