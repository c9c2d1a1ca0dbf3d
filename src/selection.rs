use serde::{Deserialize, Serialize};

use crate::types::ElectionYear;

/// The user's current control settings; the only mutable input to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub year: ElectionYear,
    pub show_relative: bool, // relative_turnout_rate vs turnout_rate
    pub swing_only: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self { year: ElectionYear::Y2012, show_relative: true, swing_only: false }
    }
}

impl Selection {
    pub fn new(year: ElectionYear, show_relative: bool, swing_only: bool) -> Self {
        Self { year, show_relative, swing_only }
    }

    pub fn with_year(self, year: ElectionYear) -> Self { Self { year, ..self } }

    pub fn with_show_relative(self, show_relative: bool) -> Self { Self { show_relative, ..self } }

    pub fn with_swing_only(self, swing_only: bool) -> Self { Self { swing_only, ..self } }
}
