//! HTTP surface for tool invocation.
//!
//! The surface is deliberately thin: listing the tool definitions and
//! invoking one. Invocation always answers 200 with the JSON envelope;
//! failures travel in-band in the envelope, never as HTTP errors.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::Deserialize;

use crate::state::AppState;
use crate::tools::{Tool, ToolExecutor, all_tools};

/// Build the application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/tools", get(list_tools))
        .route("/tools/call", post(call_tool))
}

async fn health() -> &'static str {
    "OK"
}

/// List the tool definitions agent callers may invoke.
async fn list_tools() -> Json<Vec<Tool>> {
    Json(all_tools())
}

/// One tool invocation.
#[derive(Debug, Deserialize)]
pub struct ToolCallRequest {
    /// Tool name, e.g. `queryOrderStatus`.
    pub name: String,
    /// Tool arguments; defaults to an empty object.
    #[serde(default)]
    pub arguments: serde_json::Value,
}

/// Invoke a tool and return the JSON-serialized envelope.
async fn call_tool(State(state): State<AppState>, Json(body): Json<ToolCallRequest>) -> String {
    let executor = ToolExecutor::new(
        state.cart(),
        state.orders(),
        state.shipping(),
        state.email(),
    );
    executor.execute(&body.name, &body.arguments).await
}
