use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode},
    Json,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

use crate::config::Config;
use crate::errors::{AppError, ResultExt};
use crate::mailer::EmailProvider;
use crate::message::{build_email, compose_message};
use crate::models::{ContactPayload, ContactResponse};
use crate::validation::check_formats;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Provider that delivers the inquiry email.
    pub mailer: Arc<dyn EmailProvider>,
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "atlas-contact-api",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// POST /api/contact
///
/// Relays one landing-page submission to the firm's inbox.
///
/// Flow:
/// 1. Parse the JSON body (failure → 500).
/// 2. Check every required field is present and non-empty (failure → 400).
/// 3. Optionally re-check formats when strict validation is configured (failure → 400).
/// 4. Render the message, stamped with Santiago time and the request origin.
/// 5. Send it once through the email provider (failure → 500).
///
/// Nothing is stored and nothing is retried.
pub async fn contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    tracing::info!("📨 POST /api/contact ({} bytes)", body.len());

    let payload: ContactPayload =
        serde_json::from_slice(&body).context("parsing contact form body")?;

    let submission = payload.into_submission()?;

    if state.config.strict_validation {
        check_formats(&submission)?;
    }

    let origin = headers
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok());
    let text = compose_message(&submission, origin, Utc::now());

    state
        .mailer
        .send(build_email(text))
        .await
        .context("delivering contact email")?;

    tracing::info!("✓ Contact inquiry from '{}' delivered", submission.company);

    Ok((
        StatusCode::OK,
        Json(ContactResponse::success("Formulario enviado exitosamente")),
    ))
}

/// Any method other than POST on the submission endpoint.
pub async fn method_not_allowed(method: Method) -> AppError {
    tracing::warn!("Rejected {} /api/contact", method);
    AppError::MethodNotAllowed
}
