use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

use crate::errors::AppError;

/// A fully addressed email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Transactional email provider.
///
/// The submission handler only depends on this trait, so tests can swap the
/// real provider for an in-memory one.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Deliver one email. No retries: a failure is final for this attempt.
    async fn send(&self, email: OutboundEmail) -> Result<(), AppError>;
}

/// Client for the SendGrid v3 mail API.
#[derive(Clone)]
pub struct SendGridClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SendGridClient {
    /// Creates a new `SendGridClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the SendGrid API (`https://api.sendgrid.com`).
    /// * `api_key` - The API key used as bearer token.
    pub fn new(base_url: String, api_key: String) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::ExternalApiError(format!("Failed to create SendGrid client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl EmailProvider for SendGridClient {
    async fn send(&self, email: OutboundEmail) -> Result<(), AppError> {
        let url = format!("{}/v3/mail/send", self.base_url);
        tracing::info!("Sending email to {} via SendGrid", email.to);

        let body = json!({
            "personalizations": [
                { "to": [ { "email": email.to } ] }
            ],
            "from": { "email": email.from },
            "subject": email.subject,
            "content": [
                { "type": "text/plain", "value": email.text },
                { "type": "text/html", "value": email.html }
            ]
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("SendGrid request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "SendGrid returned {}: {}",
                status, error_text
            )));
        }

        tracing::info!("✓ Email accepted by SendGrid");
        Ok(())
    }
}
