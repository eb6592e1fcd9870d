//! Todoist CLI
//!
//! The same operations as the MCP server, from the terminal. Results are
//! printed as JSON on stdout; failures go to stderr with exit code 1.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use todoist_mcp::cli::{self, Cli};
use todoist_mcp::config::Config;
use todoist_mcp::RestClient;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    mcp_common::init_tracing_with_level("todoist_mcp", cli.log_level())?;

    let config = Config::load()?;
    let client = RestClient::new(config.api)?;

    match cli::execute(cli.command, &client, &config.review).await {
        Ok(output) => {
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(message) => {
            eprintln!("{}", message);
            Ok(ExitCode::FAILURE)
        }
    }
}
