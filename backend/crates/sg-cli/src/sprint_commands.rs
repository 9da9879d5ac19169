use clap::Subcommand;

#[derive(Subcommand)]
pub enum SprintCommands {
    /// Show the board: current/upcoming sprints and past sprints
    List,

    /// Get a sprint by ID
    Get {
        /// Sprint ID (UUID)
        id: String,
    },

    /// Create a new sprint with at least three goals
    Create {
        /// POD (team) name
        #[arg(long)]
        pod_name: String,

        /// Start date (YYYY-MM-DD), today or later; defaults to today
        #[arg(long)]
        start_date: Option<String>,

        /// End date (YYYY-MM-DD), after the start date; defaults to start + 14 days
        #[arg(long)]
        end_date: Option<String>,

        /// Goal description; repeat for each goal
        #[arg(long = "goal")]
        goals: Vec<String>,

        /// Goal type, paired with --goal by position (default "Dev Complete")
        #[arg(long = "goal-type", value_parser = ["Live", "QA Complete", "Dev Complete"])]
        goal_types: Vec<String>,
    },
}
