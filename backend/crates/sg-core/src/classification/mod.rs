//! Read-side views of sprints: past vs current/upcoming, achievement and
//! which goal edits a client should offer. Nothing here is persisted; it is
//! recomputed against a caller-supplied `now` on every read.

pub mod achievement;
pub mod goal_edit_mode;
pub mod sprint_board;
pub mod sprint_phase;

use crate::{GoalEditMode, Sprint, SprintPhase};

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// First instant of `date` in UTC.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Last millisecond of `date` in UTC.
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    start_of_day(date) + Duration::days(1) - Duration::milliseconds(1)
}

impl Sprint {
    /// Past once the whole end date has elapsed.
    pub fn phase(&self, now: DateTime<Utc>) -> SprintPhase {
        if end_of_day(self.end_date) < now {
            SprintPhase::Past
        } else {
            SprintPhase::CurrentOrUpcoming
        }
    }

    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.phase(now) == SprintPhase::Past
    }

    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        start_of_day(self.start_date) <= now
    }

    pub fn edit_mode(&self, now: DateTime<Utc>) -> GoalEditMode {
        if self.is_past(now) {
            GoalEditMode::ReadOnly
        } else if self.has_started(now) {
            GoalEditMode::StatusOnly
        } else {
            GoalEditMode::Full
        }
    }

    pub fn achievement_percentage(&self) -> u8 {
        achievement::achievement_percentage(&self.goals)
    }
}
