//! Tool and resource registries.
//!
//! A registry is a static table built once at startup: tool names map to
//! `{descriptor, handler}` and resource URIs map to snapshot producers.
//! Handlers are plain functions over a shared read-only dataset `D` —
//! the registry holds no per-request state.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{QueryError, QueryResult};
use crate::rpc::types::{
    ResourceContents, ResourceDescriptor, ResourcesReadResult, ToolDefinition, ToolsCallResult,
};

/// A tool handler: filter → aggregate → render over the dataset,
/// producing the report text or an execution failure.
pub type ToolHandler<D> = fn(&D, &Map<String, Value>) -> QueryResult<String>;

/// A resource handler: a derived JSON snapshot of dataset statistics.
pub type ResourceHandler<D> = fn(&D) -> Value;

struct ToolEntry<D> {
    name: &'static str,
    description: &'static str,
    input_schema: Value,
    handler: ToolHandler<D>,
}

struct ResourceEntry<D> {
    uri: &'static str,
    name: &'static str,
    description: &'static str,
    handler: ResourceHandler<D>,
}

/// The full tool/resource surface of one server.
pub struct Registry<D> {
    tools: Vec<ToolEntry<D>>,
    resources: Vec<ResourceEntry<D>>,
}

impl<D> Default for Registry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Registry<D> {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Register a tool. The schema must declare every argument key the
    /// handler reads.
    pub fn tool(
        mut self,
        name: &'static str,
        description: &'static str,
        input_schema: Value,
        handler: ToolHandler<D>,
    ) -> Self {
        self.tools.push(ToolEntry {
            name,
            description,
            input_schema,
            handler,
        });
        self
    }

    /// Register a resource. All snapshots are served as
    /// `application/json`.
    pub fn resource(
        mut self,
        uri: &'static str,
        name: &'static str,
        description: &'static str,
        handler: ResourceHandler<D>,
    ) -> Self {
        self.resources.push(ResourceEntry {
            uri,
            name,
            description,
            handler,
        });
        self
    }

    /// Descriptors for tools/list, in registration order.
    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|tool| ToolDefinition {
                name: tool.name.to_string(),
                description: tool.description.to_string(),
                input_schema: tool.input_schema.clone(),
            })
            .collect()
    }

    /// Descriptors for resources/list, in registration order.
    pub fn resource_descriptors(&self) -> Vec<ResourceDescriptor> {
        self.resources
            .iter()
            .map(|resource| ResourceDescriptor {
                uri: resource.uri.to_string(),
                mime_type: "application/json".to_string(),
                name: resource.name.to_string(),
                description: resource.description.to_string(),
            })
            .collect()
    }

    /// Invoke a tool by name. Unknown names and execution failures both
    /// come back as `isError` payloads — the protocol channel stays
    /// clean for anything a tool can cause.
    pub fn call_tool(&self, dataset: &D, name: &str, args: &Map<String, Value>) -> ToolsCallResult {
        let Some(tool) = self.tools.iter().find(|tool| tool.name == name) else {
            return ToolsCallResult::error(QueryError::not_found("tool", name).to_string());
        };
        debug!(tool = %name, "calling tool");
        match (tool.handler)(dataset, args) {
            Ok(text) => ToolsCallResult::text(text),
            Err(error) => ToolsCallResult::error(error.to_string()),
        }
    }

    /// Read a resource by URI. Unknown URIs are a handler fault the
    /// dispatcher surfaces as an internal error naming the URI.
    pub fn read_resource(&self, dataset: &D, uri: &str) -> QueryResult<ResourcesReadResult> {
        let Some(resource) = self.resources.iter().find(|resource| resource.uri == uri) else {
            return Err(QueryError::not_found("resource", uri));
        };
        debug!(resource = %uri, "reading resource");
        let snapshot = (resource.handler)(dataset);
        let text = serde_json::to_string_pretty(&snapshot).unwrap_or_default();
        Ok(ResourcesReadResult {
            contents: vec![ResourceContents {
                uri: uri.to_string(),
                mime_type: "application/json".to_string(),
                text,
            }],
        })
    }
}
