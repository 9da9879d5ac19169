use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Delivery stage a goal is expected to reach within the sprint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GoalType {
    #[serde(rename = "Live")]
    Live,
    #[serde(rename = "QA Complete")]
    QaComplete,
    #[default]
    #[serde(rename = "Dev Complete")]
    DevComplete,
}

impl GoalType {
    pub const ALL: [GoalType; 3] = [Self::Live, Self::QaComplete, Self::DevComplete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::QaComplete => "QA Complete",
            Self::DevComplete => "Dev Complete",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::InvalidGoalType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
