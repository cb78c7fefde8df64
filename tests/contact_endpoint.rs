/// Router-level tests for the submission endpoint.
/// The email provider is replaced by an in-memory recorder.
mod common;

use atlas_contact_api::server::build_router;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{create_state, valid_payload, RecordingMailer};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

async fn send(
    mailer: Arc<RecordingMailer>,
    strict: bool,
    request: Request<Body>,
) -> (StatusCode, Value) {
    let app = build_router(create_state(mailer, strict));
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "application/json")
        .header("origin", "https://atlaspartners.cl")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_valid_submission_sends_one_email() {
    let mailer = Arc::new(RecordingMailer::default());
    let payload = valid_payload();

    let (status, body) = send(mailer.clone(), false, post_json(payload.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Formulario enviado exitosamente");

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);

    let email = &sent[0];
    assert_eq!(email.to, "contacto@atlaspartners.cl");
    assert_eq!(email.from, "noreply@atlaspartners.cl");
    assert_eq!(email.subject, "Nueva solicitud de contacto - Atlas Partners");
    for (key, value) in payload.as_object().unwrap() {
        let value = value.as_str().unwrap();
        assert!(email.text.contains(value), "{key} missing from email body");
    }
    assert!(email.text.contains("🌐 Enviado desde: https://atlaspartners.cl"));
    assert_eq!(email.html, email.text.replace('\n', "<br>"));
}

#[tokio::test]
async fn test_missing_origin_uses_fallback_label() {
    let mailer = Arc::new(RecordingMailer::default());
    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(Body::from(valid_payload().to_string()))
        .unwrap();

    let (status, _) = send(mailer.clone(), false, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(mailer.sent()[0]
        .text
        .contains("🌐 Enviado desde: Atlas Partners Website"));
}

#[tokio::test]
async fn test_missing_description_uses_placeholder() {
    let mailer = Arc::new(RecordingMailer::default());
    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("descripcion");

    let (status, _) = send(mailer.clone(), false, post_json(payload.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert!(mailer.sent()[0].text.contains("No proporcionada"));
}

#[tokio::test]
async fn test_missing_sector_is_rejected_without_sending() {
    let mailer = Arc::new(RecordingMailer::default());
    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("sector");

    let (status, body) = send(mailer.clone(), false, post_json(payload.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "message": "Missing required fields" }));
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_each_empty_required_field_is_rejected() {
    for key in atlas_contact_api::models::REQUIRED_FIELDS {
        let mailer = Arc::new(RecordingMailer::default());
        let mut payload = valid_payload();
        payload[key] = Value::String(String::new());

        let (status, _) = send(mailer.clone(), false, post_json(payload.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "empty {key} accepted");
        assert!(mailer.sent().is_empty());
    }
}

#[tokio::test]
async fn test_get_is_method_not_allowed() {
    let mailer = Arc::new(RecordingMailer::default());
    let request = Request::builder()
        .method("GET")
        .uri("/api/contact")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(mailer.clone(), false, request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, serde_json::json!({ "message": "Method not allowed" }));
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_put_and_delete_are_method_not_allowed() {
    for method in ["PUT", "DELETE", "PATCH"] {
        let mailer = Arc::new(RecordingMailer::default());
        let request = Request::builder()
            .method(method)
            .uri("/api/contact")
            .header("content-type", "application/json")
            .body(Body::from(valid_payload().to_string()))
            .unwrap();

        let (status, _) = send(mailer.clone(), false, request).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} accepted");
        assert!(mailer.sent().is_empty());
    }
}

#[tokio::test]
async fn test_provider_failure_is_generic_500() {
    let mailer = Arc::new(RecordingMailer::failing(
        "SendGrid returned 403 Forbidden: The from address does not match a verified Sender Identity",
    ));

    let (status, body) = send(mailer.clone(), false, post_json(valid_payload().to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        serde_json::json!({ "success": false, "message": "Error al procesar el formulario" })
    );
    assert!(!body.to_string().contains("Sender Identity"));
    assert!(!body.to_string().contains("403"));
    assert_eq!(mailer.sent().len(), 1);
}

#[tokio::test]
async fn test_malformed_body_is_generic_500() {
    let mailer = Arc::new(RecordingMailer::default());

    let (status, body) = send(mailer.clone(), false, post_json("{\"nombre\": ".to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Error al procesar el formulario");
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_presence_only_by_default_accepts_bad_formats() {
    // Format checks live on the client unless strict validation is switched on
    let mailer = Arc::new(RecordingMailer::default());
    let mut payload = valid_payload();
    payload["email"] = Value::String("not-an-email".to_string());
    payload["telefono"] = Value::String("123".to_string());

    let (status, _) = send(mailer.clone(), false, post_json(payload.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(mailer.sent().len(), 1);
}

#[tokio::test]
async fn test_strict_validation_rejects_bad_formats() {
    let mailer = Arc::new(RecordingMailer::default());
    let mut payload = valid_payload();
    payload["telefono"] = Value::String("+551234567".to_string());

    let (status, body) = send(mailer.clone(), true, post_json(payload.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid phone");
    assert!(mailer.sent().is_empty());

    let (status, _) = send(mailer.clone(), true, post_json(valid_payload().to_string())).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
    let mailer = Arc::new(RecordingMailer::default());
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(mailer, false, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "atlas-contact-api");
}
