//! The dispatch loop — reads requests from stdin, writes responses to stdout.
//!
//! Strictly sequential: one line is read, parsed, dispatched and answered
//! before the next is touched, so responses always come back in request
//! order. A handler fault produces one error response and the loop keeps
//! going; only losing the stdio stream itself ends the process.

use std::io::{self, BufRead, Write};

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::types::*;
use super::MCP_VERSION;
use crate::registry::Registry;

/// One MCP server: identity + immutable dataset + registry.
///
/// The dataset is constructed before the first request and never mutated;
/// nothing here needs locking. Serving several clients concurrently would
/// mean one `Server` per connection sharing the same dataset.
pub struct Server<D> {
    name: &'static str,
    version: &'static str,
    dataset: D,
    registry: Registry<D>,
}

impl<D> Server<D> {
    pub fn new(name: &'static str, dataset: D, registry: Registry<D>) -> Self {
        Self {
            name,
            version: env!("CARGO_PKG_VERSION"),
            dataset,
            registry,
        }
    }

    /// Run the loop over stdin/stdout until end-of-stream.
    pub fn run(&self) -> io::Result<()> {
        info!(server = %self.name, "MCP server ready — waiting for JSON-RPC requests on stdin");
        let stdin = io::stdin();
        let stdout = io::stdout();
        let result = self.serve(stdin.lock(), &mut stdout.lock());
        info!(server = %self.name, "MCP server shutting down");
        result
    }

    /// The read-eval-respond loop over arbitrary streams (tests drive
    /// this with in-memory buffers).
    pub fn serve(&self, reader: impl BufRead, writer: &mut impl Write) -> io::Result<()> {
        for line in reader.lines() {
            let line = line?;
            if let Some(response) = self.handle_line(&line) {
                let serialized = serde_json::to_string(&response).unwrap_or_default();
                debug!(response = %serialized, "sending response");
                writeln!(writer, "{serialized}")?;
                writer.flush()?;
            }
        }
        Ok(())
    }

    /// Parse one input line into a request and dispatch it. Returns
    /// `None` for blank lines, notifications, and malformed input whose
    /// request id cannot be recovered.
    pub fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        debug!(request = %trimmed, "received request");

        let value: Value = match serde_json::from_str(trimmed) {
            Ok(v) => v,
            Err(e) => {
                // No id is recoverable from a line that is not JSON.
                return self.respond_or_skip(None, PARSE_ERROR, format!("Parse error: {e}"));
            }
        };

        let recovered_id = value
            .as_object()
            .and_then(|obj| obj.get("id"))
            .filter(|id| !id.is_null())
            .cloned();

        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(r) => r,
            Err(e) => {
                return self.respond_or_skip(
                    recovered_id,
                    INVALID_REQUEST,
                    format!("Invalid request: {e}"),
                );
            }
        };

        self.handle(request)
    }

    /// Dispatch a single request. Notifications (no id) are processed
    /// for side effects only and never answered.
    pub fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let id = request.id.clone();
        let is_notification = request.id.is_none();

        let response = match request.method.as_str() {
            "initialize" => {
                info!("client initializing");
                let result = InitializeResult {
                    protocol_version: MCP_VERSION.to_string(),
                    capabilities: ServerCapabilities {
                        resources: ResourceCapability {},
                        tools: ToolCapability {},
                    },
                    server_info: ServerInfo {
                        name: self.name.to_string(),
                        version: self.version.to_string(),
                    },
                };
                JsonRpcResponse::success(id, serde_json::to_value(result).unwrap_or_default())
            }

            "notifications/initialized" => {
                info!("client initialized");
                return None;
            }

            "resources/list" => {
                debug!("listing resources");
                let result = ResourcesListResult {
                    resources: self.registry.resource_descriptors(),
                };
                JsonRpcResponse::success(id, serde_json::to_value(result).unwrap_or_default())
            }

            "resources/read" => match request.params.get("uri").and_then(Value::as_str) {
                Some(uri) => match self.registry.read_resource(&self.dataset, uri) {
                    Ok(result) => JsonRpcResponse::success(
                        id,
                        serde_json::to_value(result).unwrap_or_default(),
                    ),
                    Err(error) => JsonRpcResponse::error(id, INTERNAL_ERROR, error.to_string()),
                },
                None => JsonRpcResponse::error(
                    id,
                    INTERNAL_ERROR,
                    "missing required parameter: uri".to_string(),
                ),
            },

            "tools/list" => {
                debug!("listing tools");
                let result = ToolsListResult {
                    tools: self.registry.tool_definitions(),
                };
                JsonRpcResponse::success(id, serde_json::to_value(result).unwrap_or_default())
            }

            "tools/call" => match request.params.get("name").and_then(Value::as_str) {
                Some(name) => {
                    let empty = Map::new();
                    let args = request
                        .params
                        .get("arguments")
                        .and_then(Value::as_object)
                        .unwrap_or(&empty);
                    let payload = self.registry.call_tool(&self.dataset, name, args);
                    JsonRpcResponse::success(
                        id,
                        serde_json::to_value(payload).unwrap_or_default(),
                    )
                }
                None => JsonRpcResponse::error(
                    id,
                    INTERNAL_ERROR,
                    "missing required parameter: name".to_string(),
                ),
            },

            other => {
                warn!(method = %other, "unknown method");
                JsonRpcResponse::error(id, METHOD_NOT_FOUND, format!("Method not found: {other}"))
            }
        };

        if is_notification {
            return None;
        }
        Some(response)
    }

    /// Emit an error response when an id was recovered from the line,
    /// otherwise log the bad line to stderr and move on.
    fn respond_or_skip(
        &self,
        id: Option<Value>,
        code: i64,
        message: String,
    ) -> Option<JsonRpcResponse> {
        if id.is_some() {
            Some(JsonRpcResponse::error(id, code, message))
        } else {
            warn!(%message, "dropping malformed request line");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryResult;
    use serde_json::json;

    struct Nothing;

    fn echo_tool(_data: &Nothing, args: &Map<String, Value>) -> QueryResult<String> {
        Ok(format!("args: {}", Value::Object(args.clone())))
    }

    fn snapshot(_data: &Nothing) -> Value {
        json!({ "ok": true })
    }

    fn server() -> Server<Nothing> {
        let registry = Registry::new()
            .tool(
                "echo",
                "Echo arguments",
                json!({"type": "object", "properties": {}}),
                echo_tool,
            )
            .resource("test://snapshot", "Snapshot", "A fixed snapshot", snapshot);
        Server::new("test-server", Nothing, registry)
    }

    fn response_value(response: JsonRpcResponse) -> Value {
        serde_json::to_value(&response).unwrap()
    }

    #[test]
    fn response_id_echoes_request_id() {
        let server = server();
        let response = server
            .handle_line(r#"{"jsonrpc":"2.0","id":42,"method":"tools/list"}"#)
            .unwrap();
        let value = response_value(response);
        assert_eq!(value["id"], json!(42));
        assert!(value.get("error").is_none());
    }

    #[test]
    fn notifications_produce_no_output() {
        let server = server();
        assert!(server
            .handle_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .is_none());
        // Any message without an id is a notification, whatever the method.
        assert!(server
            .handle_line(r#"{"jsonrpc":"2.0","method":"tools/list"}"#)
            .is_none());
    }

    #[test]
    fn explicit_null_id_is_a_notification() {
        let server = server();
        assert!(server
            .handle_line(r#"{"jsonrpc":"2.0","id":null,"method":"tools/list"}"#)
            .is_none());
        // Same on the malformed-envelope path: null is never a reply id.
        assert!(server
            .handle_line(r#"{"jsonrpc":"2.0","id":null,"method":17}"#)
            .is_none());
    }

    #[test]
    fn unknown_method_is_32601_without_result() {
        let server = server();
        let response = server
            .handle_line(r#"{"jsonrpc":"2.0","id":7,"method":"bogus/method"}"#)
            .unwrap();
        let value = response_value(response);
        assert_eq!(value["error"]["code"], json!(-32601));
        assert!(value.get("result").is_none());
        assert_eq!(value["id"], json!(7));
    }

    #[test]
    fn malformed_json_is_skipped() {
        let server = server();
        assert!(server.handle_line("this is not json").is_none());
        assert!(server.handle_line("").is_none());
    }

    #[test]
    fn invalid_envelope_with_recoverable_id_is_32600() {
        let server = server();
        let response = server
            .handle_line(r#"{"jsonrpc":"2.0","id":3,"method":17}"#)
            .unwrap();
        let value = response_value(response);
        assert_eq!(value["error"]["code"], json!(-32600));
        assert_eq!(value["id"], json!(3));
    }

    #[test]
    fn invalid_envelope_without_id_is_skipped() {
        let server = server();
        assert!(server.handle_line(r#"{"jsonrpc":"2.0","method":17}"#).is_none());
    }

    #[test]
    fn initialize_reports_capabilities_and_identity() {
        let server = server();
        let response = server
            .handle_line(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#)
            .unwrap();
        let value = response_value(response);
        let result = &value["result"];
        assert_eq!(result["protocolVersion"], json!("2024-11-05"));
        assert_eq!(result["serverInfo"]["name"], json!("test-server"));
        assert!(result["capabilities"]["resources"].is_object());
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[test]
    fn unknown_resource_is_internal_error_naming_the_uri() {
        let server = server();
        let response = server
            .handle_line(
                r#"{"jsonrpc":"2.0","id":9,"method":"resources/read","params":{"uri":"test://missing"}}"#,
            )
            .unwrap();
        let value = response_value(response);
        assert_eq!(value["error"]["code"], json!(-32603));
        assert!(value["error"]["message"]
            .as_str()
            .unwrap()
            .contains("test://missing"));
    }

    #[test]
    fn unknown_tool_is_a_successful_envelope_with_is_error() {
        let server = server();
        let response = server
            .handle_line(
                r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"nope","arguments":{}}}"#,
            )
            .unwrap();
        let value = response_value(response);
        assert!(value.get("error").is_none());
        assert_eq!(value["result"]["isError"], json!(true));
    }

    #[test]
    fn missing_arguments_defaults_to_empty_object() {
        let server = server();
        let response = server
            .handle_line(
                r#"{"jsonrpc":"2.0","id":6,"method":"tools/call","params":{"name":"echo"}}"#,
            )
            .unwrap();
        let value = response_value(response);
        assert_eq!(value["result"]["content"][0]["text"], json!("args: {}"));
    }

    #[test]
    fn serve_emits_responses_in_request_order() {
        let server = server();
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"resources/list"}"#,
            "\n",
        );
        let mut output = Vec::new();
        server.serve(input.as_bytes(), &mut output).unwrap();

        let lines: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["id"], json!(1));
        assert_eq!(lines[1]["id"], json!(2));
    }

    #[test]
    fn a_bad_request_does_not_poison_the_loop() {
        let server = server();
        let input = concat!(
            "garbage line\n",
            r#"{"jsonrpc":"2.0","id":8,"method":"tools/list"}"#,
            "\n",
        );
        let mut output = Vec::new();
        server.serve(input.as_bytes(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains(r#""id":8"#));
    }
}
