//! Landing-page contact form controller.
//!
//! Holds the field values and per-field errors of one form session, validates
//! them before anything goes over the network, and turns the endpoint's reply
//! into either a redirect to the confirmation page or a retry message.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::errors::AppError;
use crate::models::{
    ContactPayload, ContactResponse, EmployeeRange, RevenueRange, SaleTiming, Sector,
};
use crate::validation::{is_valid_cl_phone, is_valid_email};

/// Path of the submission endpoint.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Static confirmation page reached by full navigation after a successful send.
pub const SUCCESS_PATH: &str = "/success.html";

/// Shown for every failed attempt, whatever the cause.
pub const RETRY_MESSAGE: &str = "Error al enviar el formulario. Por favor, intenta nuevamente.";

/// The form's inputs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Company,
    Sector,
    EmployeeRange,
    AnnualRevenueRange,
    SaleTiming,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Company,
        FormField::Sector,
        FormField::EmployeeRange,
        FormField::AnnualRevenueRange,
        FormField::SaleTiming,
        FormField::Description,
    ];

    /// JSON key used on the wire.
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "nombre",
            FormField::Email => "email",
            FormField::Phone => "telefono",
            FormField::Company => "empresa",
            FormField::Sector => "sector",
            FormField::EmployeeRange => "empleados",
            FormField::AnnualRevenueRange => "ventas",
            FormField::SaleTiming => "timing",
            FormField::Description => "descripcion",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::Description)
    }

    /// `(value, label)` pairs for select inputs; `None` for free-text inputs.
    pub fn options(&self) -> Option<Vec<(&'static str, &'static str)>> {
        match self {
            FormField::Sector => Some(Sector::ALL.iter().map(|o| (o.as_str(), o.label())).collect()),
            FormField::EmployeeRange => Some(
                EmployeeRange::ALL
                    .iter()
                    .map(|o| (o.as_str(), o.label()))
                    .collect(),
            ),
            FormField::AnnualRevenueRange => Some(
                RevenueRange::ALL
                    .iter()
                    .map(|o| (o.as_str(), o.label()))
                    .collect(),
            ),
            FormField::SaleTiming => Some(
                SaleTiming::ALL
                    .iter()
                    .map(|o| (o.as_str(), o.label()))
                    .collect(),
            ),
            _ => None,
        }
    }
}

/// Field → error message for every rule a submit attempt violated.
pub type FormErrors = BTreeMap<FormField, String>;

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(FormErrors),
    /// Sent and accepted; navigate to this path.
    Redirect(&'static str),
    /// Sent (or tried to) and failed; show this message and keep the values.
    Failed(&'static str),
}

/// Raw reply from the submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    pub status: u16,
    pub body: String,
}

impl TransportReply {
    /// A 2xx reply whose JSON body carries `success: true`.
    ///
    /// Non-2xx statuses and unparseable bodies are failures.
    pub fn is_success(&self) -> bool {
        if !(200..300).contains(&self.status) {
            return false;
        }

        serde_json::from_str::<ContactResponse>(&self.body)
            .map(|reply| reply.success == Some(true))
            .unwrap_or(false)
    }
}

/// Network hop between the form and the submission endpoint.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn post_contact(&self, payload: &ContactPayload) -> Result<TransportReply, AppError>;
}

/// Posts the form as JSON to `{base_url}/api/contact`.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::ExternalApiError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), CONTACT_ENDPOINT),
        })
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn post_contact(&self, payload: &ContactPayload) -> Result<TransportReply, AppError> {
        let response = self.client.post(&self.endpoint).json(payload).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportReply { status, body })
    }
}

/// State of one contact form session.
#[derive(Debug, Clone)]
pub struct ContactForm {
    values: BTreeMap<FormField, String>,
    errors: FormErrors,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    /// Every field starts out empty, with no errors.
    pub fn new() -> Self {
        Self {
            values: FormField::ALL
                .iter()
                .map(|field| (*field, String::new()))
                .collect(),
            errors: FormErrors::new(),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    /// Update a field and drop its recorded error. Re-validation waits for the next submit.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
        self.errors.remove(&field);
    }

    /// Errors recorded by the last submit attempt, minus fields edited since.
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Run every rule over the current values.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();

        let mut require_text = |field: FormField, message: &str| {
            if self.value(field).trim().is_empty() {
                errors.insert(field, message.to_string());
                false
            } else {
                true
            }
        };

        require_text(FormField::Name, "Nombre requerido");
        let has_email = require_text(FormField::Email, "Email requerido");
        let has_phone = require_text(FormField::Phone, "Teléfono requerido");
        require_text(FormField::Company, "Nombre de empresa requerido");

        if has_email && !is_valid_email(self.value(FormField::Email)) {
            errors.insert(FormField::Email, "Email inválido".to_string());
        }
        if has_phone && !is_valid_cl_phone(self.value(FormField::Phone)) {
            errors.insert(FormField::Phone, "Teléfono chileno inválido".to_string());
        }

        for (field, message) in [
            (FormField::Sector, "Sector requerido"),
            (FormField::EmployeeRange, "Número de empleados requerido"),
            (FormField::AnnualRevenueRange, "Ventas anuales requeridas"),
            (FormField::SaleTiming, "Timing de venta requerido"),
        ] {
            if self.value(field).is_empty() {
                errors.insert(field, message.to_string());
            }
        }

        errors
    }

    /// The JSON body the endpoint expects. All nine keys are always sent.
    pub fn to_payload(&self) -> ContactPayload {
        let value = |field: FormField| Some(self.value(field).to_string());

        ContactPayload {
            name: value(FormField::Name),
            email: value(FormField::Email),
            phone: value(FormField::Phone),
            company: value(FormField::Company),
            sector: value(FormField::Sector),
            employee_range: value(FormField::EmployeeRange),
            annual_revenue_range: value(FormField::AnnualRevenueRange),
            sale_timing: value(FormField::SaleTiming),
            description: value(FormField::Description),
        }
    }

    /// Validate, then post once.
    ///
    /// Invalid forms never reach the transport. There is no in-flight guard or
    /// idempotency key: calling this twice posts twice.
    pub async fn submit<T>(&mut self, transport: &T) -> SubmitOutcome
    where
        T: SubmissionTransport + ?Sized,
    {
        let errors = self.validate();
        self.errors = errors.clone();
        if !errors.is_empty() {
            tracing::debug!("Contact form has {} invalid field(s)", errors.len());
            return SubmitOutcome::Invalid(errors);
        }

        match transport.post_contact(&self.to_payload()).await {
            Ok(reply) if reply.is_success() => SubmitOutcome::Redirect(SUCCESS_PATH),
            Ok(reply) => {
                tracing::warn!("Contact form rejected with status {}", reply.status);
                SubmitOutcome::Failed(RETRY_MESSAGE)
            }
            Err(e) => {
                tracing::error!("Error submitting form: {}", e);
                SubmitOutcome::Failed(RETRY_MESSAGE)
            }
        }
    }
}
