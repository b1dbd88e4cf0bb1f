//! Type-safe enumerations for specimen metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Lifecycle state of a specimen.
///
/// Stored lowercase in sample data (`new`, `onroad`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecimenState {
    /// Registered but not yet shipped.
    New,
    /// In transit between sites.
    Onroad,
    /// Received at the processing unit.
    Psu,
    /// No material left.
    Depleted,
    Lost,
    Discarded,
}

impl SpecimenState {
    /// All states in display order.
    pub const ALL: [SpecimenState; 6] = [
        SpecimenState::New,
        SpecimenState::Onroad,
        SpecimenState::Psu,
        SpecimenState::Depleted,
        SpecimenState::Lost,
        SpecimenState::Discarded,
    ];

    /// Returns the stored form of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecimenState::New => "new",
            SpecimenState::Onroad => "onroad",
            SpecimenState::Psu => "psu",
            SpecimenState::Depleted => "depleted",
            SpecimenState::Lost => "lost",
            SpecimenState::Discarded => "discarded",
        }
    }

    /// Returns true if the specimen can no longer be used.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SpecimenState::Depleted | SpecimenState::Lost | SpecimenState::Discarded
        )
    }
}

impl fmt::Display for SpecimenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecimenState {
    type Err = ModelError;

    /// Parse a stored state. Matching is exact; the store writes lowercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpecimenState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ModelError::UnknownState(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_state() {
        for state in SpecimenState::ALL {
            assert_eq!(state.as_str().parse::<SpecimenState>().unwrap(), state);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Lost".parse::<SpecimenState>().is_err());
        assert!("".parse::<SpecimenState>().is_err());
    }

    #[test]
    fn terminal_states() {
        assert!(SpecimenState::Lost.is_terminal());
        assert!(!SpecimenState::Onroad.is_terminal());
    }
}
