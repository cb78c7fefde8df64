//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use atlas_contact_api::config::Config;
use atlas_contact_api::errors::AppError;
use atlas_contact_api::handlers::AppState;
use atlas_contact_api::mailer::{EmailProvider, OutboundEmail};
use std::sync::{Arc, Mutex};

/// In-memory provider that records every email it is asked to send.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    fail_with: Option<String>,
}

impl RecordingMailer {
    pub fn failing(message: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailProvider for RecordingMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), AppError> {
        self.sent.lock().unwrap().push(email);
        match &self.fail_with {
            Some(message) => Err(AppError::ExternalApiError(message.clone())),
            None => Ok(()),
        }
    }
}

/// Helper function to create test config
pub fn create_test_config(strict_validation: bool) -> Config {
    Config {
        port: 8080,
        sendgrid_api_key: "SG.test-key".to_string(),
        sendgrid_base_url: "https://api.sendgrid.com".to_string(),
        static_dir: "public".to_string(),
        strict_validation,
    }
}

pub fn create_state(mailer: Arc<RecordingMailer>, strict_validation: bool) -> Arc<AppState> {
    Arc::new(AppState {
        config: create_test_config(strict_validation),
        mailer,
    })
}

/// A submission that passes every client and server check.
pub fn valid_payload() -> serde_json::Value {
    serde_json::json!({
        "nombre": "Carolina Rojas",
        "email": "carolina@panaderiaandes.cl",
        "telefono": "+56912345678",
        "empresa": "Panadería Los Andes SpA",
        "sector": "alimentos",
        "empleados": "11-50",
        "ventas": "100mm-500mm",
        "timing": "proximo-ano",
        "descripcion": "Tres locales en Providencia"
    })
}
