use crate::{Sprint, SprintPhase};

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

/// Sprints split for display: current/upcoming soonest deadline first,
/// past most recently ended first.
#[derive(Debug, Clone, Default)]
pub struct SprintBoard {
    pub current_upcoming: Vec<Sprint>,
    pub past: Vec<Sprint>,
}

impl SprintBoard {
    pub fn partition(sprints: Vec<Sprint>, now: DateTime<Utc>) -> Self {
        let (mut past, mut current_upcoming): (Vec<_>, Vec<_>) = sprints
            .into_iter()
            .partition(|s| s.phase(now) == SprintPhase::Past);

        current_upcoming.sort_by(|a, b| a.end_date.cmp(&b.end_date).then_with(|| tie_break(a, b)));
        past.sort_by(|a, b| b.end_date.cmp(&a.end_date).then_with(|| tie_break(a, b)));

        Self {
            current_upcoming,
            past,
        }
    }

    pub fn len(&self) -> usize {
        self.current_upcoming.len() + self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Same end date: POD name ascending, then latest start first.
fn tie_break(a: &Sprint, b: &Sprint) -> Ordering {
    a.pod_name
        .cmp(&b.pod_name)
        .then_with(|| b.start_date.cmp(&a.start_date))
}
