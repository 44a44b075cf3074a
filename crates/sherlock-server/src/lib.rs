//! HTTP transport for the Sherlock case service.
//!
//! Exposes an axum [`Router`] with a single endpoint backed by a
//! [`sherlock_graphql::Executor`]:
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/sherlockcase` | `?query=<document>` |
//! | `POST` | `/sherlockcase` | Body: `{"query": "...", "variables": {...}, "operationName": "..."}` |
//!
//! Both answer 200 with `{"data": ..., "errors": [...]}` for every request the
//! executor runs, including ones that fail validation.

pub mod error;

pub use error::ApiError;

use std::sync::Arc;

use axum::{
  Json, Router,
  extract::{Query, State, rejection::JsonRejection},
  routing::get,
};
use serde::Deserialize;
use sherlock_core::CaseStore;
use sherlock_graphql::{ExecutionResult, Executor, QueryRequest};
use sherlock_store_memory::MemoryStore;
use tower_http::trace::TraceLayer;

/// Path of the query endpoint.
pub const ENDPOINT: &str = "/sherlockcase";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `SHERLOCK_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  /// Start with the two stock cases instead of an empty collection.
  #[serde(default = "default_seed")]
  pub seed: bool,
}

fn default_host() -> String { "0.0.0.0".to_string() }

fn default_port() -> u16 { 8001 }

fn default_seed() -> bool { true }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host: default_host(),
      port: default_port(),
      seed: default_seed(),
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through the handlers.
#[derive(Clone)]
pub struct AppState {
  pub executor: Executor,
}

impl AppState {
  pub fn new(store: Arc<dyn CaseStore>) -> Self {
    Self {
      executor: Executor::new(store),
    }
  }

  /// Build the in-memory store described by `config`.
  pub fn from_config(config: &ServerConfig) -> Self {
    let store = if config.seed {
      MemoryStore::seeded()
    } else {
      MemoryStore::new()
    };
    Self::new(Arc::new(store))
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the service.
pub fn router(state: AppState) -> Router {
  Router::new()
    .route(ENDPOINT, get(query_get).post(query_post))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Handlers ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QueryParams {
  /// A missing parameter runs the empty document, which fails to parse.
  #[serde(default)]
  pub query: String,
}

/// `GET /sherlockcase?query=<document>`
async fn query_get(
  State(state): State<AppState>,
  Query(params): Query<QueryParams>,
) -> Json<ExecutionResult> {
  Json(state.executor.execute(&params.query).await)
}

/// `POST /sherlockcase` — body: [`QueryRequest`] as JSON.
async fn query_post(
  State(state): State<AppState>,
  body: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<ExecutionResult>, ApiError> {
  let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  Ok(Json(state.executor.execute_request(request).await))
}
