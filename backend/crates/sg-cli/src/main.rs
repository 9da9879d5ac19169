//! sg - sprint goals CLI
//!
//! A terminal client for the sprint goals API.
//!
//! # Examples
//!
//! ```bash
//! # Show the board
//! sg sprint list --pretty
//!
//! # Create a sprint
//! sg sprint create --pod-name Phoenix --start-date 2025-01-01 --end-date 2025-01-15 \
//!     --goal "Ship the login page" --goal-type Live \
//!     --goal "Harden the payments API" --goal "Write the release notes"
//!
//! # Mark the first goal done
//! sg goals set-status <sprint-id> --index 0 --status Done
//! ```

mod cli;
mod commands;
mod goal_commands;
mod sprint_commands;

use crate::{
    cli::Cli, commands::Commands, goal_commands::GoalCommands, sprint_commands::SprintCommands,
};

use sg_cli::{
    BoardView, CliClientResult, Client, ClientError, NewSprintArgs, goal_edits, resolve_server_url,
};
use sg_core::{GoalCandidate, GoalDraft, GoalType, Sprint};

use std::path::Path;
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };
            match output {
                Ok(text) => {
                    println!("{}", text);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            for (field, message) in e.field_errors() {
                eprintln!("  {}: {}", field, message);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliClientResult<Value> {
    let client = Client::new(&resolve_server_url(cli.server)?);

    match cli.command {
        Commands::Sprint { action } => match action {
            SprintCommands::List => {
                let sprints = client.list_sprints().await?;
                to_json(&BoardView::build(sprints, Utc::now())?)
            }
            SprintCommands::Get { id } => to_json(&client.get_sprint(&id).await?),
            SprintCommands::Create {
                pod_name,
                start_date,
                end_date,
                goals,
                goal_types,
            } => {
                let args = NewSprintArgs {
                    pod_name,
                    start_date,
                    end_date,
                    goals,
                    goal_types,
                };
                let draft = args.into_draft(Utc::now().date_naive())?;
                to_json(&client.create_sprint(&draft).await?)
            }
        },

        Commands::Goals { action } => match action {
            GoalCommands::List { sprint_id } => to_json(&client.list_goals(&sprint_id).await?),
            GoalCommands::SetStatus {
                sprint_id,
                index,
                status,
            } => {
                let sprint = fetch_sprint(&client, &sprint_id).await?;
                let goals = goal_edits::set_status(&sprint, index, status.parse()?, Utc::now())?;
                submit(&client, &sprint_id, &goals).await
            }
            GoalCommands::Add {
                sprint_id,
                description,
                goal_type,
            } => {
                let sprint = fetch_sprint(&client, &sprint_id).await?;
                let goals =
                    goal_edits::add_goal(&sprint, &description, goal_type.parse()?, Utc::now())?;
                submit(&client, &sprint_id, &goals).await
            }
            GoalCommands::Edit {
                sprint_id,
                index,
                description,
                goal_type,
            } => {
                let sprint = fetch_sprint(&client, &sprint_id).await?;
                let goal_type = goal_type.map(|t| t.parse::<GoalType>()).transpose()?;
                let goals = goal_edits::edit_goal(
                    &sprint,
                    index,
                    description.as_deref(),
                    goal_type,
                    Utc::now(),
                )?;
                submit(&client, &sprint_id, &goals).await
            }
            GoalCommands::Remove { sprint_id, index } => {
                let sprint = fetch_sprint(&client, &sprint_id).await?;
                let goals = goal_edits::remove_goal(&sprint, index, Utc::now())?;
                submit(&client, &sprint_id, &goals).await
            }
            GoalCommands::Replace { sprint_id, file } => {
                let candidates = read_goals_file(&file)?;
                let sprint = fetch_sprint(&client, &sprint_id).await?;
                let goals = goal_edits::replace_all(&sprint, &candidates, Utc::now())?;
                submit(&client, &sprint_id, &goals).await
            }
        },
    }
}

async fn fetch_sprint(client: &Client, id: &str) -> CliClientResult<Sprint> {
    Ok(Sprint::try_from(client.get_sprint(id).await?)?)
}

async fn submit(client: &Client, sprint_id: &str, goals: &[GoalDraft]) -> CliClientResult<Value> {
    to_json(&client.replace_goals(sprint_id, goals).await?)
}

fn read_goals_file(path: &Path) -> CliClientResult<Vec<GoalCandidate>> {
    let text = std::fs::read_to_string(path).map_err(|source| ClientError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

fn to_json<T: serde::Serialize>(value: &T) -> CliClientResult<Value> {
    Ok(serde_json::to_value(value)?)
}
