//! Server initialization utilities
//!
//! Provides standardized tracing setup and the `serve_stdio!` macro
//! used by the server binaries in this workspace.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging for MCP servers and CLIs
///
/// Logs go to stderr: stdout is reserved for the MCP protocol (or, for CLIs,
/// for the command's JSON output). Filtering comes from `RUST_LOG`, with a
/// default of `info` for the given crate.
///
/// Set `LOG_FORMAT=json` for structured JSON output. Default is
/// human-readable text without ANSI colors.
///
/// # Arguments
///
/// * `crate_name` - The crate's module path name (e.g., "todoist_mcp")
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    init_tracing_with_level(crate_name, "info")
}

/// Like [`init_tracing`], with an explicit default level for the crate
///
/// CLIs use this to stay quiet (`warn`) unless `RUST_LOG` says otherwise.
pub fn init_tracing_with_level(crate_name: &str, level: &str) -> anyhow::Result<()> {
    let directive = format!("{}={}", crate_name, level);
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

/// Macro for standardized MCP server initialization
///
/// Expands to a complete `#[tokio::main] async fn main()` that:
/// 1. Initializes tracing to stderr
/// 2. Builds the server from `$build`, an expression of type
///    `anyhow::Result<Server>` (servers that need configuration load it here)
/// 3. Serves via stdio transport
/// 4. Waits for shutdown
///
/// The calling crate must depend on `tokio`, `rmcp`, `tracing` and `anyhow`.
///
/// # Example
///
/// ```rust,ignore
/// mcp_common::serve_stdio!("todoist_mcp", TodoistMcpServer::from_env());
/// ```
#[macro_export]
macro_rules! serve_stdio {
    ($crate_name:expr, $build:expr) => {
        #[tokio::main]
        async fn main() -> anyhow::Result<()> {
            use rmcp::ServiceExt;

            $crate::init_tracing($crate_name)?;

            tracing::info!(concat!("Starting ", $crate_name, " MCP Server"));

            let server = $build?;
            let service = server.serve(rmcp::transport::stdio()).await?;

            tracing::info!("Server running, waiting for requests...");

            service.waiting().await?;

            tracing::info!("Server shutting down");
            Ok(())
        }
    };
}
