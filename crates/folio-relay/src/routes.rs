//! HTTP handlers.

use crate::mailer::{MailMessage, Mailer};
use crate::{Error, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use folio_core::contact::{CONTACT_PATH, ContactAccepted, ContactPayload};
use http::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;

/// Health check path.
pub const HEALTH_PATH: &str = "/api/health";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// Delivers composed mail.
    pub mailer: Arc<dyn Mailer>,
    /// Sending account.
    pub sender: String,
    /// Delivery address.
    pub recipient: String,
}

/// Routes without middleware.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(CONTACT_PATH, post(contact))
        .route(HEALTH_PATH, get(health))
        .with_state(state)
}

async fn contact(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ContactPayload>, JsonRejection>,
) -> Result<Json<ContactAccepted>> {
    let Json(payload) = payload.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Error::PayloadTooLarge
        } else {
            Error::BadRequest(rejection.body_text())
        }
    })?;
    let submission = payload.into_submission()?;
    let message = MailMessage::compose(&submission, &state.sender, &state.recipient);
    state.mailer.send(&message).await?;
    tracing::info!(subject = %submission.subject, "Contact message relayed");
    Ok(Json(ContactAccepted::default()))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
