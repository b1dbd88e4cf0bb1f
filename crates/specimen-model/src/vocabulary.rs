//! Recognized values for specimen type levels and location slots.
//!
//! The codec stores any string; these lists are what the specimen store
//! accepts and are used only by [`crate::validation`].

/// Level 1: specimen material.
pub const TYPE_LEVEL1: &[&str] = &[
    "blood",
    "buccal",
    "hair",
    "breastmilk",
    "stool",
    "vaginal_swab",
    "placenta",
    "cord_blood",
    "tissue",
    "rectal_swab",
    "skin_swab",
];

/// Level 2: nucleic-acid class.
pub const TYPE_LEVEL2: &[&str] = &["dna", "rna"];

/// Level 3: preparation.
pub const TYPE_LEVEL3: &[&str] = &["amplicon", "library", "haplotype", "enriched_mtdna"];

/// Largest value accepted for fridge, shelf, rack and box numbers.
pub const MAX_STORAGE_NUMBER: u8 = 99;

/// Accepted spot column letters.
pub const SPOT_AXIS1: std::ops::RangeInclusive<char> = 'A'..='I';

/// Accepted spot row digits.
pub const SPOT_AXIS2: std::ops::RangeInclusive<char> = '1'..='9';

/// Vocabulary for the type level at `position` (0-based).
pub fn type_level_vocabulary(position: usize) -> Option<&'static [&'static str]> {
    match position {
        0 => Some(TYPE_LEVEL1),
        1 => Some(TYPE_LEVEL2),
        2 => Some(TYPE_LEVEL3),
        _ => None,
    }
}

/// Returns true if `value` is a recognized type at `position`.
pub fn is_known_type_level(position: usize, value: &str) -> bool {
    type_level_vocabulary(position).is_some_and(|vocabulary| vocabulary.contains(&value))
}

/// Returns true if `value` is a storage number in `0..=99`.
pub fn is_storage_number(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c| c.is_ascii_digit())
        && value
            .parse::<u8>()
            .is_ok_and(|number| number <= MAX_STORAGE_NUMBER)
}

/// Returns true if `value` is a two character spot such as `A1` or `I9`.
pub fn is_spot(value: &str) -> bool {
    let mut chars = value.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(axis1), Some(axis2), None) => {
            SPOT_AXIS1.contains(&axis1) && SPOT_AXIS2.contains(&axis2)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_levels_are_positional() {
        assert!(is_known_type_level(0, "blood"));
        assert!(!is_known_type_level(1, "blood"));
        assert!(is_known_type_level(2, "enriched_mtdna"));
        assert!(!is_known_type_level(3, "dna"));
    }

    #[test]
    fn storage_numbers() {
        assert!(is_storage_number("0"));
        assert!(is_storage_number("99"));
        assert!(is_storage_number("07"));
        assert!(!is_storage_number("100"));
        assert!(!is_storage_number("-1"));
        assert!(!is_storage_number("+1"));
        assert!(!is_storage_number(""));
    }

    #[test]
    fn spots() {
        assert!(is_spot("A1"));
        assert!(is_spot("I9"));
        assert!(!is_spot("J1"));
        assert!(!is_spot("A0"));
        assert!(!is_spot("a1"));
        assert!(!is_spot("A"));
        assert!(!is_spot("A12"));
    }
}
