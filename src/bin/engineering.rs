//! Engineering org MCP server.
//!
//! Runs a JSON-RPC 2.0 server over STDIO that answers questions about
//! the engineering organization: people, projects, repositories,
//! deployments, incidents, code reviews, and oncall.

use anyhow::Result;
use tracing::info;

use orgdesk::engineering;
use orgdesk::rpc::Server;

fn main() -> Result<()> {
    // Tracing goes to stderr; stdout carries the protocol.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let data = engineering::seed();
    info!(
        engineers = data.engineers.len(),
        projects = data.projects.len(),
        repositories = data.repositories.len(),
        "engineering dataset seeded"
    );

    let server = Server::new(engineering::SERVER_NAME, data, engineering::registry());
    server.run()?;
    Ok(())
}
