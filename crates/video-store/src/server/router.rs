use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use object_store::ObjectStore;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::error::HandlerError;
use crate::handlers::{self, Handler};
use crate::request::event_from_slice;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ObjectStore>,
    /// Upload events carry the whole video inline
    pub max_event_bytes: usize,
}

/// Create the Axum router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/invoke/:handler", post(invoke_handler))
        .layer(DefaultBodyLimit::max(state.max_event_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Decode the JSON event in the body and run the named handler on it
async fn invoke_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let Some(handler) = Handler::from_name(&name) else {
        return (StatusCode::NOT_FOUND, format!("Unknown handler: {name}")).into_response();
    };

    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            return HandlerError::UnreadableBody {
                status: rejection.status().as_u16(),
                reason: rejection.body_text(),
            }
            .into_envelope()
            .into_response()
        }
    };

    debug!(handler = handler.name(), bytes = body.len(), "Invocation received");

    let event = match event_from_slice(&body) {
        Ok(event) => event,
        Err(err) => return err.into_envelope().into_response(),
    };

    handlers::invoke(handler, state.store.as_ref(), event)
        .await
        .into_response()
}
