//! Goal identity across a wholesale replacement.
//!
//! Saving a goal list replaces the whole array, but goals that survive the
//! edit keep their identifiers:
//!
//! 1. a draft echoing the id of one of the sprint's goals keeps that id;
//! 2. a draft without an id reuses the id of an existing goal with exactly
//!    the same description, type and status;
//! 3. everything else, including drafts echoing an unknown id, gets a fresh id.
//!
//! Each existing id is handed out at most once. Submission order is kept.

use crate::{Goal, GoalDraft};

use std::collections::HashSet;

use uuid::Uuid;

pub fn reconcile_goals(existing: &[Goal], drafts: Vec<GoalDraft>) -> Vec<Goal> {
    let known: HashSet<Uuid> = existing.iter().map(|g| g.id).collect();
    let mut claimed: HashSet<Uuid> = HashSet::with_capacity(existing.len());

    // Echoed ids first, so a content match never steals an id the client sent.
    let mut assigned: Vec<Option<Uuid>> = drafts
        .iter()
        .map(|draft| {
            draft
                .id
                .filter(|id| known.contains(id) && claimed.insert(*id))
        })
        .collect();

    for (draft, slot) in drafts.iter().zip(assigned.iter_mut()) {
        if slot.is_some() || draft.id.is_some() {
            continue;
        }

        if let Some(goal) = existing
            .iter()
            .find(|g| !claimed.contains(&g.id) && g.has_same_content(draft))
        {
            claimed.insert(goal.id);
            *slot = Some(goal.id);
        }
    }

    drafts
        .into_iter()
        .zip(assigned)
        .map(|(draft, id)| draft.into_goal(id.unwrap_or_else(Uuid::new_v4)))
        .collect()
}
