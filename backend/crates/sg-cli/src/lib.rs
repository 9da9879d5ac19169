//! sg-cli library
//!
//! Exports the HTTP client, board view and local goal edits for use by the
//! `sg` binary and tests.

pub mod board;
pub(crate) mod client;
pub mod goal_edits;
pub mod new_sprint;
mod server_url;

#[cfg(test)]
mod tests;

pub use board::{BoardView, SprintCard};
pub use client::{CliClientResult, Client, ClientError};
pub use new_sprint::NewSprintArgs;
pub use server_url::resolve_server_url;
