//! Renders a contact submission into the inquiry email sent to the firm.

use chrono::{DateTime, Utc};
use chrono_tz::America::Santiago;

use crate::mailer::OutboundEmail;
use crate::models::ContactSubmission;

pub const SENDER_ADDRESS: &str = "noreply@atlaspartners.cl";
pub const RECIPIENT_ADDRESS: &str = "contacto@atlaspartners.cl";
pub const SUBJECT: &str = "Nueva solicitud de contacto - Atlas Partners";

/// Origin label used when the request carries no `Origin` header.
pub const DEFAULT_ORIGIN: &str = "Atlas Partners Website";

const NO_DESCRIPTION: &str = "No proporcionada";

/// Format a timestamp the way es-CL renders local date-times (`dd-mm-yyyy, HH:MM:SS`),
/// in Santiago time.
pub fn format_sent_at(sent_at: DateTime<Utc>) -> String {
    sent_at
        .with_timezone(&Santiago)
        .format("%d-%m-%Y, %H:%M:%S")
        .to_string()
}

/// Build the plain-text body of the inquiry email.
pub fn compose_message(
    submission: &ContactSubmission,
    origin: Option<&str>,
    sent_at: DateTime<Utc>,
) -> String {
    let description = submission.description.as_deref().unwrap_or(NO_DESCRIPTION);
    let origin = origin.filter(|o| !o.is_empty()).unwrap_or(DEFAULT_ORIGIN);

    format!(
        "Nueva solicitud de contacto recibida desde Atlas Partners:

📋 INFORMACIÓN DEL CONTACTO:
• Nombre: {name}
• Email: {email}
• Teléfono: {phone}

🏢 INFORMACIÓN DE LA EMPRESA:
• Nombre de la empresa: {company}
• Sector: {sector}
• Número de empleados: {employees}
• Ventas anuales: {revenue}
• Timing de venta: {timing}

📝 DESCRIPCIÓN ADICIONAL:
{description}

📅 Fecha de envío: {sent_at}
🌐 Enviado desde: {origin}
",
        name = submission.name,
        email = submission.email,
        phone = submission.phone,
        company = submission.company,
        sector = submission.sector,
        employees = submission.employee_range,
        revenue = submission.annual_revenue_range,
        timing = submission.sale_timing,
        description = description,
        sent_at = format_sent_at(sent_at),
        origin = origin,
    )
}

/// HTML rendition of a plain-text body: every line break becomes `<br>`.
pub fn to_html(text: &str) -> String {
    text.replace('\n', "<br>")
}

/// Wrap a rendered body in the fixed envelope (sender, recipient, subject).
pub fn build_email(text: String) -> OutboundEmail {
    OutboundEmail {
        to: RECIPIENT_ADDRESS.to_string(),
        from: SENDER_ADDRESS.to_string(),
        subject: SUBJECT.to_string(),
        html: to_html(&text),
        text,
    }
}
