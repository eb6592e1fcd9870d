//! Command-line front end
//!
//! Argument definitions for the `todoist` binary and the dispatch from a
//! parsed command to the entity operations. Output is pretty JSON (or a
//! one-line confirmation); failures come back as `Err` text for the binary
//! to print on stderr with a non-zero exit.

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;

use crate::colors::color_names;
use crate::config::ReviewConfig;
use crate::ops::{self, CompletionReport, Outcome};
use crate::review;
use crate::todoist::TodoistApi;
use crate::types::{NewTask, TaskQuery, TaskUpdate};

#[derive(Debug, Parser)]
#[command(name = "todoist")]
#[command(about = "Manage Todoist tasks and projects from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Default log level for this crate, from the -v count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a task; words starting with '@' become labels
    Add {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// List tasks as a tree
    List {
        /// Only tasks carrying this label
        label: Option<String>,
        /// Only tasks in this project
        #[arg(long = "projectId")]
        project_id: Option<String>,
        /// Todoist filter query
        #[arg(long)]
        filter: Option<String>,
    },
    /// Move a task into a project
    Process { task_id: String, project_id: String },
    /// Delete a task
    Delete { task_id: String },
    /// Update a task
    Update {
        task_id: String,
        #[arg(long)]
        content: Option<String>,
        /// Due date in natural language
        #[arg(long)]
        due: Option<String>,
        /// 1 (normal) to 4 (urgent)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
        priority: Option<u8>,
        /// Comma-separated replacement labels
        #[arg(long, value_delimiter = ',')]
        labels: Option<Vec<String>>,
    },
    /// Complete one or more tasks, one at a time
    Complete {
        #[arg(required = true)]
        task_ids: Vec<String>,
    },
    /// Show a project
    ProjectDetails { project_id: String },
    /// List projects as a tree
    Projects,
    /// Create a project
    CreateProject {
        name: String,
        #[arg(long = "parentId")]
        parent_id: Option<String>,
        #[arg(long, help = color_help())]
        color: Option<String>,
        #[arg(long)]
        favorite: bool,
    },
    /// Delete a project
    DeleteProject { project_id: String },
    /// List labels
    GetLabels,
    /// Create a label
    CreateLabel {
        name: String,
        #[arg(long, help = color_help())]
        color: Option<String>,
        #[arg(long)]
        favorite: bool,
    },
    /// List saved filters (always empty, the API cannot list them)
    GetFilters,
    /// Print the GTD weekly review
    WeeklyReview {
        /// Inbox project ID (defaults to configuration)
        #[arg(long)]
        inbox: Option<String>,
        /// Someday/maybe project ID (defaults to configuration)
        #[arg(long)]
        someday: Option<String>,
    },
}

fn color_help() -> String {
    format!("Color name: {}", color_names())
}

/// Split `add` arguments into content words and '@' labels
pub fn split_labels(words: &[String]) -> (String, Vec<String>) {
    let (labels, content): (Vec<&String>, Vec<&String>) =
        words.iter().partition(|word| word.starts_with('@'));

    let content = content
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    let labels = labels
        .into_iter()
        .map(|label| label.trim_start_matches('@').to_string())
        .collect();

    (content, labels)
}

fn pretty<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| e.to_string())
}

fn render<T: Serialize>(outcome: Outcome<T>) -> Result<String, String> {
    match outcome {
        Ok(value) => pretty(&value),
        Err(err) => Err(pretty(&err)?),
    }
}

fn render_text(outcome: Outcome<String>) -> Result<String, String> {
    match outcome {
        Ok(message) => Ok(message),
        Err(err) => Err(pretty(&err)?),
    }
}

/// Run a command against the service
///
/// `Ok` holds the text for stdout, `Err` the text for stderr.
pub async fn execute(
    command: Command,
    api: &dyn TodoistApi,
    review_config: &ReviewConfig,
) -> Result<String, String> {
    match command {
        Command::Add { words } => {
            let (content, labels) = split_labels(&words);
            if content.is_empty() {
                return Err("Please provide a task to add.".to_string());
            }
            let task = NewTask {
                content,
                labels,
                ..Default::default()
            };
            render(ops::add_task(api, task).await)
        }
        Command::List {
            label,
            project_id,
            filter,
        } => {
            let query = TaskQuery {
                label,
                project_id,
                filter,
            };
            render(ops::list_tasks(api, query).await)
        }
        Command::Process {
            task_id,
            project_id,
        } => render_text(ops::process_task(api, &task_id, &project_id).await),
        Command::Delete { task_id } => render_text(ops::delete_task(api, &task_id).await),
        Command::Update {
            task_id,
            content,
            due,
            priority,
            labels,
        } => {
            let update = TaskUpdate {
                content,
                due_string: due,
                priority,
                labels,
            };
            if update.is_empty() {
                return Err("Nothing to update: pass --content, --due, --priority or --labels.".to_string());
            }
            render_text(ops::update_task(api, &task_id, update).await)
        }
        Command::Complete { task_ids } => {
            let report = CompletionReport::new(ops::complete_tasks(api, &task_ids).await);
            let text = pretty(&report)?;
            if report.summary.failed > 0 {
                Err(text)
            } else {
                Ok(text)
            }
        }
        Command::ProjectDetails { project_id } => {
            render(ops::get_project_details(api, &project_id).await)
        }
        Command::Projects => render(ops::list_projects(api).await),
        Command::CreateProject {
            name,
            parent_id,
            color,
            favorite,
        } => render(
            ops::create_project(api, &name, parent_id, color.as_deref(), favorite.then_some(true))
                .await,
        ),
        Command::DeleteProject { project_id } => {
            render_text(ops::delete_project(api, &project_id).await)
        }
        Command::GetLabels => render(ops::get_labels(api).await),
        Command::CreateLabel {
            name,
            color,
            favorite,
        } => render(
            ops::create_label(api, &name, color.as_deref(), favorite.then_some(true)).await,
        ),
        Command::GetFilters => render(ops::get_filters(api).await),
        Command::WeeklyReview { inbox, someday } => {
            let scope = review_config
                .scope(inbox, someday)
                .map_err(|e| e.to_string())?;
            pretty(&review::weekly_review(api, &scope).await)
        }
    }
}
