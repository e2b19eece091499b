// src/ports/http.rs
use crate::application::{NoteCreator, NoteFetcher, NoteRemover};
use crate::config::StorageSettings;
use crate::domain::{CreatedNote, DomainError};
use crate::infrastructure::BlobNoteStore;
use crate::util::time::utc_timestamp;
use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub storage: StorageSettings,
}

impl AppState {
    pub fn new(storage: StorageSettings) -> Self {
        Self { storage }
    }

    fn store(&self) -> BlobNoteStore {
        BlobNoteStore::new(self.storage.clone())
    }
}

#[derive(Debug, Deserialize)]
struct CreateNoteRequest {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

/// HTTP face of a `DomainError`: status code plus `{"error": message}`.
#[derive(Debug)]
pub struct ApiError(DomainError, Option<&'static str>);

impl ApiError {
    /// Replace the reply message for an unconfigured store
    pub fn with_unconfigured_message(self, message: &'static str) -> Self {
        Self(self.0, Some(message))
    }

    pub fn status(&self) -> StatusCode {
        match self.0 {
            DomainError::ValidationFailed(_) | DomainError::InvalidJson => StatusCode::BAD_REQUEST,
            DomainError::NoteNotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Unconfigured(_)
            | DomainError::StorageUnavailable(_)
            | DomainError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match &self.0 {
            DomainError::NoteNotFound(_) => "Note not found".to_string(),
            DomainError::Unconfigured(_) => {
                self.1.unwrap_or("Storage not configured").to_string()
            }
            DomainError::InvalidJson => "Invalid JSON".to_string(),
            // Storage failures are passed through to the caller unfiltered
            DomainError::ValidationFailed(msg)
            | DomainError::StorageUnavailable(msg)
            | DomainError::Serialization(msg) => msg.clone(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err, None)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        } else {
            debug!(error = %self.0, %status, "Request rejected");
        }

        let body = Json(serde_json::json!({
            "error": self.message(),
        }));

        (status, body).into_response()
    }
}

/// All routes of the note service.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/notes", post(create_note))
        .route("/notes/", get(missing_note_id).delete(missing_note_id))
        .route("/notes/:id", get(get_note).delete(delete_note))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    if !state.storage.is_configured() {
        warn!("No storage connection configured; note endpoints will answer 500");
    }

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(
        addr = %listener.local_addr().context("Listener has no local address")?,
        container = %state.storage.container,
        "Note service listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Note service failed")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => {
            error!(error = %e, "Cannot listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}

async fn create_note(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request: CreateNoteRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Malformed create request");
        DomainError::InvalidJson
    })?;
    let text = request.text.unwrap_or_default();

    let note = NoteCreator::new(state.store())
        .create_note(&text)
        .await
        .map_err(|e| {
            ApiError::from(e).with_unconfigured_message("Storage connection not configured")
        })?;

    Ok((StatusCode::CREATED, Json(CreatedNote::from(&note))))
}

async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let document = NoteFetcher::new(state.store())
        .fetch_document(&id)
        .await?;

    // stored document goes out exactly as written
    Ok(([(header::CONTENT_TYPE, "application/json")], document).into_response())
}

async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    NoteRemover::new(state.store()).remove_note(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn missing_note_id() -> ApiError {
    DomainError::ValidationFailed("Note ID required".to_string()).into()
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: utc_timestamp(),
    })
}
