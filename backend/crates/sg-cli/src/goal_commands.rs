use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum GoalCommands {
    /// List a sprint's goals in order
    List {
        /// Sprint ID (UUID)
        sprint_id: String,
    },

    /// Mark a goal done or not done
    SetStatus {
        /// Sprint ID (UUID)
        sprint_id: String,

        /// Zero-based goal position
        #[arg(long)]
        index: usize,

        #[arg(long, value_parser = ["Done", "Not Done"])]
        status: String,
    },

    /// Add a goal to a sprint that has not started
    Add {
        /// Sprint ID (UUID)
        sprint_id: String,

        #[arg(long)]
        description: String,

        #[arg(long = "type", default_value = "Dev Complete", value_parser = ["Live", "QA Complete", "Dev Complete"])]
        goal_type: String,
    },

    /// Change a goal's description or type on a sprint that has not started
    Edit {
        /// Sprint ID (UUID)
        sprint_id: String,

        /// Zero-based goal position
        #[arg(long)]
        index: usize,

        #[arg(long)]
        description: Option<String>,

        #[arg(long = "type", value_parser = ["Live", "QA Complete", "Dev Complete"])]
        goal_type: Option<String>,
    },

    /// Remove a goal from a sprint that has not started
    Remove {
        /// Sprint ID (UUID)
        sprint_id: String,

        /// Zero-based goal position
        #[arg(long)]
        index: usize,
    },

    /// Replace all goals from a JSON array file
    Replace {
        /// Sprint ID (UUID)
        sprint_id: String,

        /// Path to a JSON array of goals
        #[arg(long)]
        file: PathBuf,
    },
}
