//! Serve command implementation.

use super::Settings;
use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use brvm_lib::prelude::*;
use chrono::Local;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Builds the snapshot API: `GET /api/<entity>`.
pub(crate) fn router(resolver: SnapshotResolver) -> Router {
    Router::new()
        .route("/api/:entity", get(entity_snapshot))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(resolver))
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn entity_snapshot(
    State(resolver): State<Arc<SnapshotResolver>>,
    Path(entity): Path<String>,
) -> Response {
    let Ok(kind) = entity.parse::<EntityKind>() else {
        return error_response(StatusCode::NOT_FOUND, format!("Unknown entity: {entity}"));
    };

    let today = Local::now().date_naive();
    let resolved = tokio::task::spawn_blocking(move || resolver.resolve(kind, today)).await;

    match resolved {
        Ok(Ok(resolved)) => Json(resolved.snapshot).into_response(),
        Ok(Err(e)) => {
            error!(entity = %kind, error = %e, "snapshot resolution failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to load {kind} snapshot"),
            )
        }
        Err(e) => {
            error!(entity = %kind, error = %e, "snapshot resolution task failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to load {kind} snapshot"),
            )
        }
    }
}

/// Serve snapshots until Ctrl-C.
pub(crate) async fn serve(settings: &Settings, host: &str, port: u16) -> Result<()> {
    let app = router(SnapshotResolver::new(settings.layout.clone()));

    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))?;
    info!(address = %listener.local_addr()?, "serving snapshots");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("Server error")
}
