pub mod error;
pub mod sprints;
