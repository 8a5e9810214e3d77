//! JSON-RPC 2.0 over STDIO — the MCP-facing surface.
//!
//! One request per input line, one response per output line. Tracing
//! goes to stderr so stdout stays protocol-clean.

pub mod server;
pub mod types;

pub use server::Server;

/// The single MCP protocol revision this server speaks.
pub const MCP_VERSION: &str = "2024-11-05";
