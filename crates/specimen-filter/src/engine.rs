//! Conjunctive filtering of specimen collections.
//!
//! Predicates are applied in a fixed order (family, bar code, states, type
//! levels), each narrowing the working set. The order does not change
//! the result; surviving records keep their original relative order.

use std::collections::BTreeSet;

use specimen_codec::{MAX_TYPE_LEVELS, decode_type_lenient};
use specimen_model::SpecimenRecord;
use tracing::{debug, debug_span, trace};

use crate::criteria::FilterCriteria;

/// Result of filtering a collection.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome<'a> {
    /// No collection has been loaded yet.
    NotLoaded,
    /// Records satisfying every active criterion, in input order.
    Matched(Vec<&'a SpecimenRecord>),
}

impl<'a> FilterOutcome<'a> {
    /// Matching records; empty when nothing is loaded.
    pub fn records(&self) -> &[&'a SpecimenRecord] {
        match self {
            FilterOutcome::NotLoaded => &[],
            FilterOutcome::Matched(records) => records,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, FilterOutcome::Matched(_))
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// Returns true if fewer than `total` records matched.
    pub fn is_subset_of(&self, total: usize) -> bool {
        self.is_loaded() && self.len() < total
    }

    /// Owned copies of the matching records, `None` when nothing is loaded.
    pub fn to_owned_records(&self) -> Option<Vec<SpecimenRecord>> {
        match self {
            FilterOutcome::NotLoaded => None,
            FilterOutcome::Matched(records) => {
                Some(records.iter().map(|&record| record.clone()).collect())
            }
        }
    }
}

/// One field predicate derived from the criteria.
#[derive(Debug, Clone, Copy)]
enum Predicate<'c> {
    Family(&'c str),
    BarCode(&'c str),
    States(&'c BTreeSet<String>),
    /// Accepted values by level position, `None` where the level is not
    /// filtered. The type is decoded once per record for all levels.
    TypeLevels([Option<&'c BTreeSet<String>>; MAX_TYPE_LEVELS]),
}

impl Predicate<'_> {
    fn name(&self) -> &'static str {
        match self {
            Predicate::Family(_) => "family",
            Predicate::BarCode(_) => "bar_code",
            Predicate::States(_) => "states",
            Predicate::TypeLevels(_) => "type_levels",
        }
    }

    fn matches(&self, record: &SpecimenRecord) -> bool {
        let data = &record.sample_data;
        match self {
            Predicate::Family(family) => data.family.as_deref() == Some(*family),
            Predicate::BarCode(bar_code) => record.bar_code == *bar_code,
            Predicate::States(states) => data
                .state
                .as_ref()
                .is_some_and(|state| states.contains(state)),
            Predicate::TypeLevels(accepted) => {
                let Some(encoded) = data.specimen_type.as_deref() else {
                    return false;
                };
                let levels = decode_type_lenient(encoded);
                accepted
                    .iter()
                    .enumerate()
                    .all(|(position, accepted)| match accepted {
                        None => true,
                        Some(accepted) => levels
                            .get(position)
                            .is_some_and(|level| accepted.contains(level)),
                    })
            }
        }
    }
}

/// Active predicates in application order.
fn predicates(criteria: &FilterCriteria) -> Vec<Predicate<'_>> {
    let mut predicates = Vec::new();
    if let Some(family) = criteria.family() {
        predicates.push(Predicate::Family(family));
    }
    if let Some(bar_code) = criteria.bar_code() {
        predicates.push(Predicate::BarCode(bar_code));
    }
    if !criteria.states.is_empty() {
        predicates.push(Predicate::States(&criteria.states));
    }
    let type_levels = [
        &criteria.type_level1,
        &criteria.type_level2,
        &criteria.type_level3,
    ]
    .map(|accepted| Some(accepted).filter(|accepted| !accepted.is_empty()));
    if type_levels.iter().any(Option::is_some) {
        predicates.push(Predicate::TypeLevels(type_levels));
    }
    predicates
}

/// Select the records satisfying every active criterion.
///
/// `records` is `None` while the collection has not been loaded, which
/// yields [`FilterOutcome::NotLoaded`] rather than an empty match. With no
/// active criteria every record is returned in its original order. Records
/// and criteria are never modified.
pub fn filter_specimens<'a>(
    records: Option<&'a [SpecimenRecord]>,
    criteria: &FilterCriteria,
) -> FilterOutcome<'a> {
    let Some(records) = records else {
        debug!("Specimen collection not loaded; nothing to filter");
        return FilterOutcome::NotLoaded;
    };

    let span = debug_span!("filter_specimens", total = records.len());
    let _guard = span.enter();

    let mut matched: Vec<&SpecimenRecord> = records.iter().collect();
    for predicate in predicates(criteria) {
        if matched.is_empty() {
            break;
        }
        let before = matched.len();
        matched.retain(|record| predicate.matches(record));
        trace!(
            predicate = predicate.name(),
            before,
            kept = matched.len(),
            "Applied filter predicate"
        );
    }

    debug!(matched = matched.len(), "Filtered specimen collection");
    FilterOutcome::Matched(matched)
}
