//! orgdesk — MCP servers for querying organizational data.
//!
//! A small family of Model Context Protocol servers that answer natural
//! language-ish questions about a company: who works where, which
//! projects are blocked, how deployments are trending, what incidents
//! are open. Each server speaks JSON-RPC 2.0 over STDIO (one request
//! per line, one response per line) and serves a compiled-in dataset
//! that never changes at runtime.
//!
//! The crate is one generic engine plus per-server datasets:
//!
//! - [`rpc`] — the JSON-RPC/MCP dispatch loop, generic over a dataset
//! - [`registry`] — tool and resource tables mapping names to handlers
//! - [`query`] — the filter → aggregate → render pipeline every tool
//!   is built from
//! - [`engineering`], [`hr`] — the two shipped servers: datasets, tool
//!   handlers, and resource snapshots
//!
//! Binaries: `orgdesk-eng` and `orgdesk-hr`.

pub mod engineering;
pub mod error;
pub mod hr;
pub mod query;
pub mod records;
pub mod registry;
pub mod rpc;

pub use error::{QueryError, QueryResult};
pub use registry::Registry;
pub use rpc::Server;

#[cfg(test)]
mod tests {
    //! End-to-end tests driving both servers through the wire protocol.

    use serde_json::{json, Value};

    use crate::rpc::Server;
    use crate::{engineering, hr};

    fn eng_server() -> Server<engineering::EngineeringData> {
        Server::new(
            engineering::SERVER_NAME,
            engineering::seed(),
            engineering::registry(),
        )
    }

    fn hr_server() -> Server<hr::HrData> {
        Server::new(hr::SERVER_NAME, hr::seed(), hr::registry())
    }

    fn request(method: &str, params: Value) -> String {
        json!({"jsonrpc": "2.0", "id": 1, "method": method, "params": params}).to_string()
    }

    fn call<D>(server: &Server<D>, method: &str, params: Value) -> Value {
        let response = server
            .handle_line(&request(method, params))
            .expect("expected a response");
        serde_json::to_value(&response).unwrap()
    }

    fn tool_text(server_response: &Value) -> &str {
        server_response["result"]["content"][0]["text"]
            .as_str()
            .unwrap()
    }

    #[test]
    fn both_servers_report_their_identity() {
        let eng = call(&eng_server(), "initialize", json!({}));
        assert_eq!(
            eng["result"]["serverInfo"]["name"],
            json!("engineering-server")
        );
        assert_eq!(eng["result"]["protocolVersion"], json!("2024-11-05"));

        let hr = call(&hr_server(), "initialize", json!({}));
        assert_eq!(
            hr["result"]["serverInfo"]["name"],
            json!("unified-hrm-engineering-server")
        );
    }

    #[test]
    fn tool_listings_carry_object_schemas() {
        let eng = call(&eng_server(), "tools/list", json!({}));
        let tools = eng["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 8);
        for tool in tools {
            assert!(tool["name"].is_string());
            assert!(tool["description"].is_string());
            assert_eq!(tool["inputSchema"]["type"], json!("object"));
        }

        let hr = call(&hr_server(), "tools/list", json!({}));
        assert_eq!(hr["result"]["tools"].as_array().unwrap().len(), 11);
    }

    #[test]
    fn resource_listings_are_json_documents() {
        let eng = call(&eng_server(), "resources/list", json!({}));
        let resources = eng["result"]["resources"].as_array().unwrap();
        assert_eq!(resources.len(), 4);
        for resource in resources {
            assert_eq!(resource["mimeType"], json!("application/json"));
        }

        let hr = call(&hr_server(), "resources/list", json!({}));
        assert_eq!(hr["result"]["resources"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn resource_reads_return_parseable_pretty_json() {
        let server = eng_server();
        let response = call(
            &server,
            "resources/read",
            json!({"uri": "engineering://org-overview"}),
        );
        let contents = &response["result"]["contents"][0];
        assert_eq!(contents["uri"], json!("engineering://org-overview"));
        let body: Value = serde_json::from_str(contents["text"].as_str().unwrap()).unwrap();
        assert_eq!(body["totalEngineers"], json!(9));
    }

    #[test]
    fn unknown_resource_uri_is_an_internal_error_naming_it() {
        let response = call(
            &hr_server(),
            "resources/read",
            json!({"uri": "hrm://does-not-exist"}),
        );
        assert_eq!(response["error"]["code"], json!(-32603));
        assert!(response["error"]["message"]
            .as_str()
            .unwrap()
            .contains("hrm://does-not-exist"));
    }

    #[test]
    fn unknown_tool_fails_in_the_payload_not_the_protocol() {
        let response = call(
            &eng_server(),
            "tools/call",
            json!({"name": "drop_tables", "arguments": {}}),
        );
        assert!(response.get("error").is_none());
        assert_eq!(response["result"]["isError"], json!(true));
        assert!(tool_text(&response).contains("drop_tables"));
    }

    #[test]
    fn tool_argument_type_errors_fail_in_the_payload() {
        let response = call(
            &eng_server(),
            "tools/call",
            json!({"name": "search_engineers", "arguments": {"team": 42}}),
        );
        assert_eq!(response["result"]["isError"], json!(true));
        assert!(tool_text(&response).contains("team"));
    }

    #[test]
    fn empty_arguments_mean_no_filtering() {
        let response = call(
            &eng_server(),
            "tools/call",
            json!({"name": "search_engineers", "arguments": {}}),
        );
        assert!(tool_text(&response).starts_with("Found 9 engineers:"));

        let response = call(
            &hr_server(),
            "tools/call",
            json!({"name": "search_employees", "arguments": {}}),
        );
        assert!(tool_text(&response).starts_with("Found 10 employees:"));
    }

    #[test]
    fn filters_narrow_conjunctively_over_the_wire() {
        let response = call(
            &eng_server(),
            "tools/call",
            json!({
                "name": "get_project_status",
                "arguments": {"status": "Active", "priority": "P1"}
            }),
        );
        let text = tool_text(&response);
        assert!(text.starts_with("**Project Status Report (1 projects)**"));
        assert!(text.contains("Kubernetes Migration"));
    }

    #[test]
    fn repeated_identical_requests_yield_identical_responses() {
        let server = hr_server();
        let line = request(
            "tools/call",
            json!({"name": "get_salary_analysis", "arguments": {"groupBy": "department"}}),
        );
        let first = serde_json::to_string(&server.handle_line(&line).unwrap()).unwrap();
        let second = serde_json::to_string(&server.handle_line(&line).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn a_failed_call_leaks_no_state_into_the_next() {
        let server = eng_server();
        let bad = call(
            &server,
            "tools/call",
            json!({"name": "incident_analysis", "arguments": {"severity": 1}}),
        );
        assert_eq!(bad["result"]["isError"], json!(true));

        let good = call(
            &server,
            "tools/call",
            json!({"name": "incident_analysis", "arguments": {}}),
        );
        assert!(good["result"].get("isError").is_none());
        assert!(tool_text(&good).starts_with("**Incident Analysis (4 incidents)**"));
    }

    #[test]
    fn categorical_filters_count_exact_matches() {
        let response = call(
            &eng_server(),
            "tools/call",
            json!({"name": "incident_analysis", "arguments": {"severity": "SEV2"}}),
        );
        let text = tool_text(&response);
        assert!(text.starts_with("**Incident Analysis (2 incidents)**"));
        assert!(text.contains("• Severity Breakdown: SEV2: 2\n"));
    }

    #[test]
    fn required_tool_arguments_are_enforced() {
        let response = call(
            &hr_server(),
            "tools/call",
            json!({"name": "get_employee_details", "arguments": {}}),
        );
        assert_eq!(response["result"]["isError"], json!(true));
        assert!(tool_text(&response).contains("employeeId"));
    }

    #[test]
    fn reading_a_resource_twice_returns_identical_bytes() {
        let server = hr_server();
        let first = call(
            &server,
            "resources/read",
            json!({"uri": "hrm://payroll-summary"}),
        );
        let second = call(
            &server,
            "resources/read",
            json!({"uri": "hrm://payroll-summary"}),
        );
        assert_eq!(first, second);
    }
}
