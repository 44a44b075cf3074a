//! The single entry point: query text in, [`ExecutionResult`] out.
//!
//! Execution never fails past this boundary. Syntax errors, unknown fields
//! and missing or mistyped arguments are reported in
//! [`ExecutionResult::errors`] with `data` set to `null`; store failures
//! inside a resolver become field errors.

use std::sync::Arc;

use async_graphql::{PathSegment, Request, Response, ServerError, Variables};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sherlock_core::CaseStore;

use crate::schema::{CaseSchema, build_schema};

// ─── Request ─────────────────────────────────────────────────────────────────

/// A query document plus the optional extras a JSON client may send.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryRequest {
  pub query:          String,
  #[serde(default)]
  pub variables:      Option<Value>,
  #[serde(default, rename = "operationName")]
  pub operation_name: Option<String>,
}

impl QueryRequest {
  pub fn new(query: impl Into<String>) -> Self {
    Self {
      query: query.into(),
      ..Default::default()
    }
  }

  fn into_graphql(self) -> Request {
    let mut request = Request::new(self.query);
    if let Some(variables) = self.variables.filter(|v| !v.is_null()) {
      request = request.variables(Variables::from_json(variables));
    }
    if let Some(name) = self.operation_name {
      request = request.operation_name(name);
    }
    request
  }
}

// ─── Result ──────────────────────────────────────────────────────────────────

/// Position of an error in the query document (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLocation {
  pub line:   usize,
  pub column: usize,
}

/// One entry of the error list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionError {
  pub message:   String,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub locations: Vec<ErrorLocation>,
  /// Response path of the failing field; strings for fields, numbers for
  /// list indices.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub path:      Vec<Value>,
}

impl ExecutionError {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message:   message.into(),
      locations: Vec::new(),
      path:      Vec::new(),
    }
  }
}

impl From<ServerError> for ExecutionError {
  fn from(e: ServerError) -> Self {
    Self {
      message:   e.message,
      locations: e
        .locations
        .into_iter()
        .map(|pos| ErrorLocation {
          line:   pos.line,
          column: pos.column,
        })
        .collect(),
      path:      e
        .path
        .into_iter()
        .map(|segment| match segment {
          PathSegment::Field(name) => Value::from(name),
          PathSegment::Index(index) => Value::from(index),
        })
        .collect(),
    }
  }
}

/// The outcome of one query or mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
  /// Result data, or `null` when the request never reached a resolver.
  pub data:   Value,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub errors: Vec<ExecutionError>,
}

impl ExecutionResult {
  /// A result carrying only errors.
  pub fn from_errors(errors: impl IntoIterator<Item = ExecutionError>) -> Self {
    Self {
      data:   Value::Null,
      errors: errors.into_iter().collect(),
    }
  }

  pub fn is_ok(&self) -> bool { self.errors.is_empty() }
}

impl From<Response> for ExecutionResult {
  fn from(response: Response) -> Self {
    let data = match serde_json::to_value(&response.data) {
      Ok(data) => data,
      Err(e) => {
        return Self::from_errors([ExecutionError::new(format!(
          "failed to encode result data: {e}"
        ))]);
      }
    };
    Self {
      data,
      errors: response.errors.into_iter().map(ExecutionError::from).collect(),
    }
  }
}

// ─── Executor ────────────────────────────────────────────────────────────────

/// Runs query documents against the case schema.
///
/// Cloning is cheap; the schema is reference-counted.
#[derive(Clone)]
pub struct Executor {
  schema: CaseSchema,
}

impl Executor {
  pub fn new(store: Arc<dyn CaseStore>) -> Self {
    Self {
      schema: build_schema(store),
    }
  }

  pub fn schema(&self) -> &CaseSchema { &self.schema }

  /// Execute a bare query document.
  ///
  /// Resolvers never wait on I/O; the future only awaits the schema itself.
  pub async fn execute(&self, query: &str) -> ExecutionResult {
    self.execute_request(QueryRequest::new(query)).await
  }

  /// Execute a query document with optional variables and operation name.
  pub async fn execute_request(&self, request: QueryRequest) -> ExecutionResult {
    tracing::debug!(query = %request.query, "executing query");
    let response = self.schema.execute(request.into_graphql()).await;
    let result = ExecutionResult::from(response);
    if !result.is_ok() {
      let messages: Vec<&str> =
        result.errors.iter().map(|e| e.message.as_str()).collect();
      tracing::warn!(errors = ?messages, "query produced errors");
    }
    result
  }
}
