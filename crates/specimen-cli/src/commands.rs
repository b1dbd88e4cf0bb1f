use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use specimen_cli::input::{load_collection, load_criteria};
use specimen_cli::render::{
    issues_table, location_table, records_json, records_table, type_levels_table,
};
use specimen_codec::{Location, decode_location, decode_type, encode_location, encode_type};
use specimen_filter::{FilterCriteria, FilterOutcome, filter_specimens, sort_by_family};
use specimen_model::validate_record;

use crate::cli::FilterArgs;

/// Criteria from the optional TOML file with command-line flags layered on top.
pub fn criteria_from_args(args: &FilterArgs) -> Result<FilterCriteria> {
    let base = match &args.criteria {
        Some(path) => load_criteria(path)?,
        None => FilterCriteria::default(),
    };
    let mut overrides = FilterCriteria::new()
        .with_states(args.states.iter().cloned())
        .with_type_level(1, args.type_level1.iter().cloned())
        .with_type_level(2, args.type_level2.iter().cloned())
        .with_type_level(3, args.type_level3.iter().cloned());
    overrides.family = args.family.clone();
    overrides.bar_code = args.bar_code.clone();
    Ok(base.merge(overrides))
}

pub fn run_filter(args: &FilterArgs) -> Result<()> {
    let criteria = criteria_from_args(args)?;
    let collection = load_collection(&args.records)?;
    let span = info_span!("filter", path = %args.records.display());
    let _guard = span.enter();

    let outcome = filter_specimens(collection.as_deref(), &criteria);
    let FilterOutcome::Matched(matched) = outcome else {
        println!("collection not loaded");
        return Ok(());
    };
    let total = collection.as_ref().map_or(0, Vec::len);
    info!(
        matched = matched.len(),
        total,
        active = criteria.is_active(),
        "Filtered specimen collection"
    );

    let listed = if args.by_family {
        sort_by_family(matched.iter().copied())
    } else {
        matched
    };
    if args.json {
        println!("{}", records_json(&listed).context("serialize matches")?);
    } else {
        println!("{}", records_table(&listed));
        println!("{} of {total} specimens", listed.len());
    }
    Ok(())
}

pub fn run_decode_type(encoded: &str) -> Result<()> {
    let levels = decode_type(encoded)?;
    println!("{}", type_levels_table(&levels));
    Ok(())
}

pub fn run_encode_type(levels: &[String]) -> Result<()> {
    println!("{}", encode_type(levels)?);
    Ok(())
}

pub fn run_decode_location(encoded: &str, json: bool) -> Result<()> {
    if json {
        let location = Location::decode(encoded)?;
        let rendered =
            serde_json::to_string_pretty(&location).context("serialize decoded location")?;
        println!("{rendered}");
    } else {
        let slots = decode_location(encoded)?;
        println!("{}", location_table(&slots));
    }
    Ok(())
}

/// Encode six location parts; empty arguments are treated as missing values.
pub fn run_encode_location(parts: [&str; 6]) -> Result<()> {
    let inputs: Vec<Option<&str>> = parts
        .into_iter()
        .map(|part| Some(part).filter(|part| !part.is_empty()))
        .collect();
    println!("{}", encode_location(&inputs)?);
    Ok(())
}

/// Validate a collection and return the number of issues found.
pub fn run_validate(path: &Path) -> Result<usize> {
    let Some(records) = load_collection(path)? else {
        println!("collection not loaded");
        return Ok(0);
    };
    let issues: Vec<_> = records
        .iter()
        .flat_map(|record| {
            validate_record(record)
                .into_iter()
                .map(move |issue| (record, issue))
        })
        .collect();
    if issues.is_empty() {
        println!("{} specimens, no issues", records.len());
    } else {
        println!("{}", issues_table(&issues));
        println!("{} issues in {} specimens", issues.len(), records.len());
    }
    info!(
        records = records.len(),
        issues = issues.len(),
        "Validated collection"
    );
    Ok(issues.len())
}
