//! Unified HR & engineering MCP server.
//!
//! Runs a JSON-RPC 2.0 server over STDIO that answers questions about
//! employees, departments, payroll, time off, performance reviews, and
//! the company's engineering delivery data.

use anyhow::Result;
use tracing::info;

use orgdesk::hr;
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

    let data = hr::seed();
    info!(
        employees = data.employees.len(),
        departments = data.departments.len(),
        "HR dataset seeded"
    );

    let server = Server::new(hr::SERVER_NAME, data, hr::registry());
    server.run()?;
    Ok(())
}
