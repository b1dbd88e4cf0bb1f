//! Filter criteria for specimen collections.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// User-supplied filter criteria.
///
/// Every criterion is optional. An empty string or an empty set means the
/// criterion is not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterCriteria {
    /// Exact, case-sensitive match on `sample_data.family`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Exact, case-sensitive match on `bar_code`.
    #[serde(alias = "barCode", skip_serializing_if = "Option::is_none")]
    pub bar_code: Option<String>,
    /// Accepted values of `sample_data.state`.
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub states: BTreeSet<String>,
    /// Accepted specimen materials (first type level).
    #[serde(alias = "typeLevel1", skip_serializing_if = "BTreeSet::is_empty")]
    pub type_level1: BTreeSet<String>,
    /// Accepted nucleic-acid classes (second type level).
    #[serde(alias = "typeLevel2", skip_serializing_if = "BTreeSet::is_empty")]
    pub type_level2: BTreeSet<String>,
    /// Accepted preparations (third type level).
    #[serde(alias = "typeLevel3", skip_serializing_if = "BTreeSet::is_empty")]
    pub type_level3: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    #[must_use]
    pub fn with_bar_code(mut self, bar_code: impl Into<String>) -> Self {
        self.bar_code = Some(bar_code.into());
        self
    }

    #[must_use]
    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Add accepted values for the type level at `level` (1, 2 or 3).
    ///
    /// Other levels are ignored.
    #[must_use]
    pub fn with_type_level<I, S>(mut self, level: usize, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(set) = self.type_level_mut(level) {
            set.extend(values.into_iter().map(Into::into));
        }
        self
    }

    /// Family criterion, if set to a non-empty value.
    pub fn family(&self) -> Option<&str> {
        non_empty(self.family.as_deref())
    }

    /// Bar code criterion, if set to a non-empty value.
    pub fn bar_code(&self) -> Option<&str> {
        non_empty(self.bar_code.as_deref())
    }

    /// Accepted values for the type level at `level` (1, 2 or 3).
    pub fn type_level(&self, level: usize) -> Option<&BTreeSet<String>> {
        match level {
            1 => Some(&self.type_level1),
            2 => Some(&self.type_level2),
            3 => Some(&self.type_level3),
            _ => None,
        }
    }

    fn type_level_mut(&mut self, level: usize) -> Option<&mut BTreeSet<String>> {
        match level {
            1 => Some(&mut self.type_level1),
            2 => Some(&mut self.type_level2),
            3 => Some(&mut self.type_level3),
            _ => None,
        }
    }

    /// Returns true if at least one criterion would be applied.
    pub fn is_active(&self) -> bool {
        self.family().is_some()
            || self.bar_code().is_some()
            || !self.states.is_empty()
            || !self.type_level1.is_empty()
            || !self.type_level2.is_empty()
            || !self.type_level3.is_empty()
    }

    /// Layer `overrides` on top of these criteria.
    ///
    /// Non-empty scalars in `overrides` replace ours; sets are unioned.
    #[must_use]
    pub fn merge(mut self, overrides: FilterCriteria) -> Self {
        if let Some(family) = overrides.family().map(str::to_string) {
            self.family = Some(family);
        }
        if let Some(bar_code) = overrides.bar_code().map(str::to_string) {
            self.bar_code = Some(bar_code);
        }
        self.states.extend(overrides.states);
        self.type_level1.extend(overrides.type_level1);
        self.type_level2.extend(overrides.type_level2);
        self.type_level3.extend(overrides.type_level3);
        self
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
