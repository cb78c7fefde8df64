//! Field format checks shared by the form controller and the strict server mode.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;
use crate::models::{ContactSubmission, EmployeeRange, RevenueRange, SaleTiming, Sector};

// Anything@anything.anything, no whitespace, exactly one '@'
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

// Optional +56/56 country prefix, then a 9-digit subscriber number starting 2-9
static CL_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+56|56)?[2-9]\d{8}$").expect("valid phone regex"));

/// Basic mailbox syntax check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate a Chilean phone number.
///
/// Whitespace anywhere in the input is ignored, so `+56 9 1234 5678` passes.
pub fn is_valid_cl_phone(raw: &str) -> bool {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    CL_PHONE_RE.is_match(&compact)
}

/// Format checks the endpoint skips unless strict validation is enabled.
pub fn check_formats(submission: &ContactSubmission) -> Result<(), AppError> {
    if !is_valid_email(&submission.email) {
        tracing::warn!("❌ Invalid email in submission: {}", submission.email);
        return Err(AppError::BadRequest("Invalid email".to_string()));
    }

    if !is_valid_cl_phone(&submission.phone) {
        tracing::warn!("❌ Invalid phone in submission: {}", submission.phone);
        return Err(AppError::BadRequest("Invalid phone".to_string()));
    }

    let options_known = submission.sector.parse::<Sector>().is_ok()
        && submission.employee_range.parse::<EmployeeRange>().is_ok()
        && submission.annual_revenue_range.parse::<RevenueRange>().is_ok()
        && submission.sale_timing.parse::<SaleTiming>().is_ok();
    if !options_known {
        return Err(AppError::BadRequest("Invalid option".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_basic_mailbox() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("juan.perez+ventas@empresa.cl"));
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_phone_accepts_chilean_numbers() {
        assert!(is_valid_cl_phone("+56912345678"));
        assert!(is_valid_cl_phone("56912345678"));
        assert!(is_valid_cl_phone("912345678"));
        assert!(is_valid_cl_phone("+56 9 1234 5678"));
        // Santiago landline
        assert!(is_valid_cl_phone("221234567"));
    }

    #[test]
    fn test_phone_rejects_invalid() {
        assert!(!is_valid_cl_phone("123"));
        assert!(!is_valid_cl_phone("+551234567"));
        assert!(!is_valid_cl_phone("112345678"));
        assert!(!is_valid_cl_phone("+5691234567"));
        assert!(!is_valid_cl_phone("+569123456789"));
        assert!(!is_valid_cl_phone("9-1234-5678"));
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ana".to_string(),
            email: "ana@empresa.cl".to_string(),
            phone: "+56912345678".to_string(),
            company: "Empresa".to_string(),
            sector: "comercio".to_string(),
            employee_range: "1-10".to_string(),
            annual_revenue_range: "menos-100mm".to_string(),
            sale_timing: "explorando".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_check_formats() {
        assert!(check_formats(&submission()).is_ok());

        let mut bad_email = submission();
        bad_email.email = "ana@empresa".to_string();
        assert!(matches!(
            check_formats(&bad_email),
            Err(AppError::BadRequest(msg)) if msg == "Invalid email"
        ));

        let mut bad_phone = submission();
        bad_phone.phone = "123".to_string();
        assert!(matches!(
            check_formats(&bad_phone),
            Err(AppError::BadRequest(msg)) if msg == "Invalid phone"
        ));

        let mut bad_sector = submission();
        bad_sector.sector = "mineria".to_string();
        assert!(check_formats(&bad_sector).is_err());
    }
}
