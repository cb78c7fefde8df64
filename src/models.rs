use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Wire keys the submission endpoint requires to be present and non-empty.
pub const REQUIRED_FIELDS: [&str; 8] = [
    "nombre", "email", "telefono", "empresa", "sector", "empleados", "ventas", "timing",
];

/// Wire key of the only optional field.
pub const OPTIONAL_FIELDS: [&str; 1] = ["descripcion"];

/// Raw contact form body as posted by the landing page.
///
/// Keys are the Spanish names the page sends. Every field is optional at this
/// stage: absent and `null` both deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactPayload {
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "empresa", default)]
    pub company: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(rename = "empleados", default)]
    pub employee_range: Option<String>,
    #[serde(rename = "ventas", default)]
    pub annual_revenue_range: Option<String>,
    #[serde(rename = "timing", default)]
    pub sale_timing: Option<String>,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
}

impl ContactPayload {
    /// Wire keys of required fields that are absent or empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let values = [
            &self.name,
            &self.email,
            &self.phone,
            &self.company,
            &self.sector,
            &self.employee_range,
            &self.annual_revenue_range,
            &self.sale_timing,
        ];

        REQUIRED_FIELDS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
            .map(|(key, _)| *key)
            .collect()
    }

    /// Presence-only validation: every required field must be non-empty.
    ///
    /// Formats (email, phone, enumerations) are not checked here.
    pub fn into_submission(self) -> Result<ContactSubmission, AppError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            tracing::warn!("Contact submission missing fields: {:?}", missing);
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        }

        let required = |value: Option<String>| value.unwrap_or_default();

        Ok(ContactSubmission {
            name: required(self.name),
            email: required(self.email),
            phone: required(self.phone),
            company: required(self.company),
            sector: required(self.sector),
            employee_range: required(self.employee_range),
            annual_revenue_range: required(self.annual_revenue_range),
            sale_timing: required(self.sale_timing),
            description: self.description.filter(|d| !d.is_empty()),
        })
    }
}

/// A submission whose required fields are all present.
///
/// Lives for the duration of one request and is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub sector: String,
    pub employee_range: String,
    pub annual_revenue_range: String,
    pub sale_timing: String,
    pub description: Option<String>,
}

/// JSON body returned by the submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: String,
}

impl ContactResponse {
    /// `{ message }` body used for client errors.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: None,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: Some(true),
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: Some(false),
            message: message.into(),
        }
    }
}

/// Error returned when a select value is not one of the known options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption(pub String);

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown option '{}'", self.0)
    }
}

impl std::error::Error for UnknownOption {}

/// Business sector offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Sector {
    #[serde(rename = "manufactura")]
    Manufacturing,
    #[serde(rename = "servicios")]
    Services,
    #[serde(rename = "comercio")]
    Commerce,
    #[serde(rename = "construccion")]
    Construction,
    #[serde(rename = "alimentos")]
    Food,
    #[serde(rename = "tecnologia")]
    Technology,
    #[serde(rename = "otro")]
    Other,
}

impl Sector {
    pub const ALL: [Sector; 7] = [
        Sector::Manufacturing,
        Sector::Services,
        Sector::Commerce,
        Sector::Construction,
        Sector::Food,
        Sector::Technology,
        Sector::Other,
    ];

    /// Value sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sector::Manufacturing => "manufactura",
            Sector::Services => "servicios",
            Sector::Commerce => "comercio",
            Sector::Construction => "construccion",
            Sector::Food => "alimentos",
            Sector::Technology => "tecnologia",
            Sector::Other => "otro",
        }
    }

    /// Label shown in the select.
    pub fn label(&self) -> &'static str {
        match self {
            Sector::Manufacturing => "Manufactura",
            Sector::Services => "Servicios",
            Sector::Commerce => "Comercio",
            Sector::Construction => "Construcción",
            Sector::Food => "Alimentos",
            Sector::Technology => "Tecnología",
            Sector::Other => "Otro",
        }
    }
}

impl FromStr for Sector {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// Headcount bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum EmployeeRange {
    #[serde(rename = "1-10")]
    UpTo10,
    #[serde(rename = "11-50")]
    From11To50,
    #[serde(rename = "51-200")]
    From51To200,
    #[serde(rename = "mas-200")]
    Over200,
}

impl EmployeeRange {
    pub const ALL: [EmployeeRange; 4] = [
        EmployeeRange::UpTo10,
        EmployeeRange::From11To50,
        EmployeeRange::From51To200,
        EmployeeRange::Over200,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeRange::UpTo10 => "1-10",
            EmployeeRange::From11To50 => "11-50",
            EmployeeRange::From51To200 => "51-200",
            EmployeeRange::Over200 => "mas-200",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeRange::UpTo10 => "1-10",
            EmployeeRange::From11To50 => "11-50",
            EmployeeRange::From51To200 => "51-200",
            EmployeeRange::Over200 => "Más de 200",
        }
    }
}

impl FromStr for EmployeeRange {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// Annual revenue bucket, in Chilean pesos (MM = millions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum RevenueRange {
    #[serde(rename = "menos-100mm")]
    Under100MM,
    #[serde(rename = "100mm-500mm")]
    From100To500MM,
    #[serde(rename = "500mm-2000mm")]
    From500To2000MM,
    #[serde(rename = "mas-2000mm")]
    Over2000MM,
}

impl RevenueRange {
    pub const ALL: [RevenueRange; 4] = [
        RevenueRange::Under100MM,
        RevenueRange::From100To500MM,
        RevenueRange::From500To2000MM,
        RevenueRange::Over2000MM,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RevenueRange::Under100MM => "menos-100mm",
            RevenueRange::From100To500MM => "100mm-500mm",
            RevenueRange::From500To2000MM => "500mm-2000mm",
            RevenueRange::Over2000MM => "mas-2000mm",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RevenueRange::Under100MM => "Menos de $100MM",
            RevenueRange::From100To500MM => "$100MM-$500MM",
            RevenueRange::From500To2000MM => "$500MM-$2.000MM",
            RevenueRange::Over2000MM => "Más de $2.000MM",
        }
    }
}

impl FromStr for RevenueRange {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// When the owner expects to sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum SaleTiming {
    #[serde(rename = "este-ano")]
    ThisYear,
    #[serde(rename = "proximo-ano")]
    NextYear,
    #[serde(rename = "2-3-anos")]
    TwoToThreeYears,
    #[serde(rename = "explorando")]
    Exploring,
}

impl SaleTiming {
    pub const ALL: [SaleTiming; 4] = [
        SaleTiming::ThisYear,
        SaleTiming::NextYear,
        SaleTiming::TwoToThreeYears,
        SaleTiming::Exploring,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SaleTiming::ThisYear => "este-ano",
            SaleTiming::NextYear => "proximo-ano",
            SaleTiming::TwoToThreeYears => "2-3-anos",
            SaleTiming::Exploring => "explorando",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SaleTiming::ThisYear => "Este año",
            SaleTiming::NextYear => "Próximo año",
            SaleTiming::TwoToThreeYears => "En 2-3 años",
            SaleTiming::Exploring => "Solo exploro opciones",
        }
    }
}

impl FromStr for SaleTiming {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}
