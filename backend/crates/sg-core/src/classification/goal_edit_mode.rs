use serde::Serialize;

/// Which goal edits a client offers for a sprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalEditMode {
    /// The sprint is over; goals are only viewed.
    ReadOnly,
    /// The sprint is running; only goal status may change.
    StatusOnly,
    /// The sprint has not started; goals may be added, edited and removed.
    Full,
}

impl GoalEditMode {
    pub fn allows_status_change(&self) -> bool {
        !matches!(self, Self::ReadOnly)
    }

    pub fn allows_structural_change(&self) -> bool {
        matches!(self, Self::Full)
    }
}
