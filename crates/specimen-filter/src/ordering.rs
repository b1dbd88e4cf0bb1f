//! Ordering of specimen listings.

use specimen_model::SpecimenRecord;

/// Records ordered by family, ascending.
///
/// Records without a family come first. The sort is stable, so records of
/// the same family keep their input order.
pub fn sort_by_family<'a, I>(records: I) -> Vec<&'a SpecimenRecord>
where
    I: IntoIterator<Item = &'a SpecimenRecord>,
{
    let mut ordered: Vec<&SpecimenRecord> = records.into_iter().collect();
    ordered.sort_by(|left, right| {
        left.sample_data
            .family
            .as_deref()
            .cmp(&right.sample_data.family.as_deref())
    });
    ordered
}
