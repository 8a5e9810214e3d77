//! MCP protocol types — JSON-RPC 2.0 message structures.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─── JSON-RPC 2.0 Base Types ────────────────────────────────────

/// An incoming JSON-RPC request. A missing (or null) `id` marks a
/// notification, which never receives a response.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// An outgoing JSON-RPC response: exactly one of `result` or `error`.
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// A JSON-RPC error object.
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

/// JSON parse failure on the incoming line.
pub const PARSE_ERROR: i64 = -32700;
/// Well-formed JSON that is not a usable request envelope.
pub const INVALID_REQUEST: i64 = -32600;
/// Recognized envelope, unrecognized method.
pub const METHOD_NOT_FOUND: i64 = -32601;
/// Handler fault, including unknown resource URIs (a deliberate
/// simplification inherited from the protocol's first implementation).
pub const INTERNAL_ERROR: i64 = -32603;

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<Value>, code: i64, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError { code, message }),
        }
    }
}

// ─── MCP Protocol Types ─────────────────────────────────────────

/// MCP initialize result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    pub server_info: ServerInfo,
}

/// Capabilities advertised during init.
#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub resources: ResourceCapability,
    pub tools: ToolCapability,
}

/// Resource capability (signals we expose readable resources).
#[derive(Debug, Serialize)]
pub struct ResourceCapability {}

/// Tool capability (signals we expose callable tools).
#[derive(Debug, Serialize)]
pub struct ToolCapability {}

/// Server identity.
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

/// A tool definition returned by tools/list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// tools/list result.
#[derive(Debug, Serialize)]
pub struct ToolsListResult {
    pub tools: Vec<ToolDefinition>,
}

/// A resource advertised by resources/list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub uri: String,
    pub mime_type: String,
    pub name: String,
    pub description: String,
}

/// resources/list result.
#[derive(Debug, Serialize)]
pub struct ResourcesListResult {
    pub resources: Vec<ResourceDescriptor>,
}

/// One document returned by resources/read.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContents {
    pub uri: String,
    pub mime_type: String,
    pub text: String,
}

/// resources/read result.
#[derive(Debug, Serialize)]
pub struct ResourcesReadResult {
    pub contents: Vec<ResourceContents>,
}

/// A single content block in a tool result.
#[derive(Debug, Serialize)]
pub struct ToolResultContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

/// tools/call result. Execution failures set `isError` in the payload
/// instead of surfacing as protocol errors.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsCallResult {
    pub content: Vec<ToolResultContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl ToolsCallResult {
    pub fn text(text: String) -> Self {
        Self {
            content: vec![ToolResultContent {
                content_type: "text".to_string(),
                text,
            }],
            is_error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            content: vec![ToolResultContent {
                content_type: "text".to_string(),
                text: message,
            }],
            is_error: Some(true),
        }
    }
}
