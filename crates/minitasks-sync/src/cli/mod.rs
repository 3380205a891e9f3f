/*
[INPUT]:  Parsed command-line arguments
[OUTPUT]: Synchronizer operations invoked and their resulting view printed
[POS]:    CLI presentation layer - command dispatch
[UPDATE]: When adding subcommands or changing their output
*/

pub mod render;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use minitasks_adapter::{TaskId, TasksClient};
use minitasks_sync::TaskSync;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "minitasks", version, about = "Task list kept in sync with a remote task service")]
pub struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show every task
    List {
        /// Print the tasks as JSON instead of a list
        #[arg(long)]
        json: bool,
    },
    /// Create a task
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Flip a task between open and done
    Toggle { id: TaskId },
    /// Delete a task
    Rm { id: TaskId },
    /// Show a single task as the service currently has it
    Show { id: TaskId },
}

/// Run one command. Returns `false` when a task operation failed; the failure
/// has already been printed.
pub async fn run(command: Command, sync: &TaskSync, client: &TasksClient) -> Result<bool> {
    match command {
        Command::Show { id } => {
            let task = client
                .get_task(id)
                .await
                .with_context(|| format!("fetch task {id}"))?;
            println!("{}", render::render_task(&task));
            Ok(true)
        }
        Command::List { json } => {
            if !refresh_view(sync).await {
                return Ok(false);
            }
            if json {
                let tasks = sync.tasks().await;
                println!(
                    "{}",
                    serde_json::to_string_pretty(&tasks).context("encode tasks as json")?
                );
                return Ok(true);
            }
            Ok(print_view(sync).await)
        }
        Command::Add { title } => {
            let title = title.join(" ");
            if title.trim().is_empty() {
                bail!("task title must not be empty");
            }
            if !refresh_view(sync).await {
                return Ok(false);
            }
            sync.set_draft(title).await;
            sync.submit_draft().await;
            Ok(print_view(sync).await)
        }
        Command::Toggle { id } => {
            if !refresh_view(sync).await {
                return Ok(false);
            }
            sync.toggle(id).await;
            Ok(print_view(sync).await)
        }
        Command::Rm { id } => {
            if !refresh_view(sync).await {
                return Ok(false);
            }
            sync.remove(id).await;
            Ok(print_view(sync).await)
        }
    }
}

/// Refresh before acting; on failure print the view and report `false`
async fn refresh_view(sync: &TaskSync) -> bool {
    sync.refresh().await;
    if sync.error().await.is_some() {
        print_view(sync).await;
        return false;
    }
    true
}

async fn print_view(sync: &TaskSync) -> bool {
    let snapshot = sync.snapshot().await;
    println!("{}", render::render_snapshot(&snapshot));
    snapshot.error.is_none()
}
