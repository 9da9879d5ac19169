use crate::{goal_commands::GoalCommands, sprint_commands::SprintCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sprint operations
    Sprint {
        #[command(subcommand)]
        action: SprintCommands,
    },

    /// Goal operations on an existing sprint
    Goals {
        #[command(subcommand)]
        action: GoalCommands,
    },
}
