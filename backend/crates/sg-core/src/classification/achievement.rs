use crate::Goal;

/// Percentage of goals marked done, rounded half up; 0 for an empty list.
pub fn achievement_percentage(goals: &[Goal]) -> u8 {
    let total = goals.len();
    if total == 0 {
        return 0;
    }

    let done = goals.iter().filter(|g| g.is_done()).count();

    // round(100 * done / total) in integer arithmetic
    ((done * 200 + total) / (2 * total)) as u8
}
