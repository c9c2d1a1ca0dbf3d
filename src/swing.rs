//! Year-specific swing-state membership.

use std::collections::{BTreeSet, HashMap};

use crate::{error::{Result, TurnoutError}, types::ElectionYear};

const SWING_2012: &[&str] = &["Florida", "Ohio", "Virginia", "Colorado", "Iowa", "New Hampshire", "Nevada", "North Carolina"];
const SWING_2016: &[&str] = &["Florida", "Ohio", "Pennsylvania", "Michigan", "Wisconsin", "North Carolina", "Arizona", "Nevada"];
const SWING_2020: &[&str] = &["Arizona", "Georgia", "Michigan", "Nevada", "North Carolina", "Pennsylvania", "Wisconsin"];
const SWING_2024: &[&str] = &["Arizona", "Georgia", "Michigan", "Nevada", "North Carolina", "Pennsylvania", "Wisconsin"];

/// Static mapping from election year to the states considered competitive that year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwingRegistry {
    sets: HashMap<ElectionYear, BTreeSet<String>>,
}

impl SwingRegistry {
    /// A registry with no entries; every lookup fails until years are added.
    pub fn empty() -> Self {
        Self { sets: HashMap::new() }
    }

    /// Replace the swing set for one year.
    pub fn with_override<I, S>(mut self, year: ElectionYear, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sets.insert(year, names.into_iter().map(Into::into).collect());
        self
    }

    /// Swing states for `year`.
    pub fn get_swing_states(&self, year: ElectionYear) -> Result<&BTreeSet<String>> {
        self.sets.get(&year)
            .ok_or_else(|| TurnoutError::UnknownYear { year: year.to_string() })
    }

    pub fn is_swing_state(&self, year: ElectionYear, state_name: &str) -> Result<bool> {
        Ok(self.get_swing_states(year)?.contains(state_name))
    }
}

impl Default for SwingRegistry {
    fn default() -> Self {
        [
            (ElectionYear::Y2012, SWING_2012),
            (ElectionYear::Y2016, SWING_2016),
            (ElectionYear::Y2020, SWING_2020),
            (ElectionYear::Y2024, SWING_2024),
        ]
        .into_iter()
        .fold(Self::empty(), |registry, (year, names)| registry.with_override(year, names.iter().copied()))
    }
}
