use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GoalStatus {
    #[serde(rename = "Done")]
    Done,
    #[default]
    #[serde(rename = "Not Done")]
    NotDone,
}

impl GoalStatus {
    pub const ALL: [GoalStatus; 2] = [Self::Done, Self::NotDone];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Done => "Done",
            Self::NotDone => "Not Done",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "Done" => Ok(Self::Done),
            "Not Done" => Ok(Self::NotDone),
            _ => Err(CoreError::InvalidGoalStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
