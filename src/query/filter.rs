//! Declarative record filtering driven by tool arguments.
//!
//! A tool declares one rule per recognized argument key. Absent keys
//! impose no constraint, unrecognized keys are ignored, and the rules
//! compose conjunctively in declaration order. Filtering never reorders
//! the collection.
//!
//! Match rules mirror the data they filter: free text (names, emails,
//! titles, skills) matches by case-insensitive substring; categorical
//! codes (status, severity, priority, level) match exactly and
//! case-sensitively.

use serde_json::{Map, Value};

use crate::error::{QueryError, QueryResult};

/// A set of predicates built from a tool's `arguments` object.
pub struct FilterPipeline<'args, R> {
    args: &'args Map<String, Value>,
    predicates: Vec<Box<dyn Fn(&R) -> bool>>,
    error: Option<QueryError>,
}

// Record types are plain `'static` data; the bound lets the boxed
// predicates own their captures.
impl<'args, R: 'static> FilterPipeline<'args, R> {
    pub fn new(args: &'args Map<String, Value>) -> Self {
        Self {
            args,
            predicates: Vec::new(),
            error: None,
        }
    }

    /// Case-insensitive substring match against one or more free-text
    /// fields. The record passes if any field contains the needle.
    pub fn substring(mut self, key: &'static str, fields: fn(&R) -> Vec<&str>) -> Self {
        if let Some(needle) = self.str_arg(key) {
            let needle = needle.to_lowercase();
            self.predicates.push(Box::new(move |record| {
                fields(record)
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }));
        }
        self
    }

    /// Case-sensitive exact match against a categorical field.
    pub fn exact(mut self, key: &'static str, field: fn(&R) -> &str) -> Self {
        if let Some(wanted) = self.str_arg(key) {
            self.predicates
                .push(Box::new(move |record| field(record) == wanted));
        }
        self
    }

    /// Exact match against an optional categorical field. Records
    /// without a value never pass.
    pub fn exact_opt(mut self, key: &'static str, field: fn(&R) -> Option<&str>) -> Self {
        if let Some(wanted) = self.str_arg(key) {
            self.predicates
                .push(Box::new(move |record| field(record) == Some(wanted.as_str())));
        }
        self
    }

    /// Membership test against a list-valued field (e.g. "reviews
    /// naming this reviewer").
    pub fn member(mut self, key: &'static str, field: fn(&R) -> &[&'static str]) -> Self {
        if let Some(wanted) = self.str_arg(key) {
            self.predicates
                .push(Box::new(move |record| field(record).contains(&wanted.as_str())));
        }
        self
    }

    /// Boolean equality against a flag field.
    pub fn flag(mut self, key: &'static str, field: fn(&R) -> bool) -> Self {
        match self.args.get(key) {
            None => {}
            Some(Value::Bool(wanted)) => {
                let wanted = *wanted;
                self.predicates
                    .push(Box::new(move |record| field(record) == wanted));
            }
            Some(other) => self.fail(key, other),
        }
        self
    }

    /// Run the accumulated predicates over a collection, preserving
    /// insertion order. An empty rule set returns every record.
    pub fn apply<'r>(self, records: &'r [R]) -> QueryResult<Vec<&'r R>> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(records
            .iter()
            .filter(|record| self.predicates.iter().all(|keep| keep(record)))
            .collect())
    }

    /// Fetch a string argument, recording a type error for anything
    /// that is present but not a string.
    fn str_arg(&mut self, key: &'static str) -> Option<String> {
        match self.args.get(key) {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.fail(key, other);
                None
            }
        }
    }

    fn fail(&mut self, key: &'static str, got: &Value) {
        // Keep the first failure; it is the one the caller declared first.
        if self.error.is_none() {
            self.error = Some(QueryError::invalid_argument(
                key,
                format!("unexpected type {}", type_name(got)),
            ));
        }
    }
}

/// Optional string argument read outside the pipeline (sort keys,
/// grouping dimensions). Present-but-wrong-typed values are an error.
pub fn opt_str<'a>(args: &'a Map<String, Value>, key: &'static str) -> QueryResult<Option<&'a str>> {
    match args.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(QueryError::invalid_argument(
            key,
            format!("unexpected type {}", type_name(other)),
        )),
    }
}

/// Required string argument; absence is an error.
pub fn req_str<'a>(args: &'a Map<String, Value>, key: &'static str) -> QueryResult<&'a str> {
    opt_str(args, key)?.ok_or(QueryError::missing(key))
}

/// Optional boolean argument.
pub fn opt_bool(args: &Map<String, Value>, key: &'static str) -> QueryResult<Option<bool>> {
    match args.get(key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(QueryError::invalid_argument(
            key,
            format!("unexpected type {}", type_name(other)),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
