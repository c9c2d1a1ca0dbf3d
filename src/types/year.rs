use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::TurnoutError;

/// The closed set of election years the dashboard covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ElectionYear {
    #[default]
    Y2012,
    Y2016,
    Y2020,
    Y2024,
}

impl ElectionYear {
    pub fn to_str(&self) -> &'static str {
        match self {
            ElectionYear::Y2012 => "2012",
            ElectionYear::Y2016 => "2016",
            ElectionYear::Y2020 => "2020",
            ElectionYear::Y2024 => "2024",
        }
    }

    pub fn as_u16(&self) -> u16 {
        match self {
            ElectionYear::Y2012 => 2012,
            ElectionYear::Y2016 => 2016,
            ElectionYear::Y2020 => 2020,
            ElectionYear::Y2024 => 2024,
        }
    }

    /// All supported years, oldest first.
    pub fn all() -> [ElectionYear; 4] {
        [
            ElectionYear::Y2012,
            ElectionYear::Y2016,
            ElectionYear::Y2020,
            ElectionYear::Y2024,
        ]
    }
}

impl fmt::Display for ElectionYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for ElectionYear {
    type Err = TurnoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ElectionYear::all().into_iter()
            .find(|year| year.to_str() == s)
            .ok_or_else(|| TurnoutError::UnknownYear { year: s.to_string() })
    }
}

impl TryFrom<u16> for ElectionYear {
    type Error = TurnoutError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        ElectionYear::all().into_iter()
            .find(|year| year.as_u16() == value)
            .ok_or_else(|| TurnoutError::UnknownYear { year: value.to_string() })
    }
}

impl TryFrom<String> for ElectionYear {
    type Error = TurnoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> { value.parse() }
}

impl From<ElectionYear> for String {
    fn from(year: ElectionYear) -> Self { year.to_str().to_string() }
}
