
use std::time::Duration;

use ledream_backend::{
    client::contact_api::ContactApiClient,
    rules::Field,
    use_cases::contact_form::{ContactForm, SubmitStatus, DEFAULT_ERROR_MESSAGE},
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;

#[actix_rt::test]
async fn valid_submission_is_accepted_and_dispatched_once() {
    let app = TestApp::spawn().await;
    let mut payload = valid_payload();
    payload["name"] = json!("<b>Jane</b> Doe");

    let response = app.post_contact("203.0.113.7", &payload).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Thank you for your inquiry! We've received your message and will contact you soon."
    );
    assert!(body.get("errors").is_none());

    let calls = app.notifier.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].name, "Jane Doe");
    assert_eq!(calls[0].email, "jane@example.com");
    assert_eq!(calls[0].phone, "(651)210-7253");
    assert_eq!(calls[0].project_type.as_deref(), Some("Residential"));
    assert_eq!(calls[0].budget_range, None);
}

#[actix_rt::test]
async fn honeypot_submission_is_silently_accepted() {
    let app = TestApp::spawn().await;
    let payload = json!({ "website": "http://spam.example", "name": "<script>x</script>" });

    let response = app.post_contact("203.0.113.8", &payload).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Thank you for your submission.");
    assert!(app.notifier.calls().is_empty());
    assert_eq!(app.state.contact_handler.stats.snapshot().honeypot, 1);
    assert_eq!(app.state.contact_handler.stats.snapshot().accepted, 0);
}

#[actix_rt::test]
async fn empty_honeypot_does_not_trigger_discard() {
    let app = TestApp::spawn().await;
    let mut payload = valid_payload();
    payload["website"] = json!("");

    let response = app.post_contact("203.0.113.9", &payload).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.notifier.calls().len(), 1);
}

#[actix_rt::test]
async fn missing_message_reports_length_error() {
    let app = TestApp::spawn().await;
    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("message");

    let response = app.post_contact("198.51.100.1", &payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Please correct the errors in your submission.");
    assert_eq!(body["errors"]["message"], json!(["Message must be at least 10 characters"]));
    assert!(app.notifier.calls().is_empty());
}

#[actix_rt::test]
async fn overlong_message_reports_max_length_error() {
    let app = TestApp::spawn().await;
    let mut payload = valid_payload();
    payload["message"] = json!("a".repeat(1001));

    let response = app.post_contact("198.51.100.2", &payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["errors"]["message"], json!(["Message must be less than 1000 characters"]));
}

#[actix_rt::test]
async fn every_invalid_field_is_reported() {
    let app = TestApp::spawn().await;
    let payload = json!({
        "name": 42,
        "email": "not-an-email",
        "phone": "abc",
        "serviceInterest": "Free Lights",
        "projectType": "Spaceship",
        "message": "short"
    });

    let response = app.post_contact("198.51.100.3", &payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    let errors = body["errors"].as_object().unwrap();
    for field in ["name", "email", "phone", "serviceInterest", "projectType", "message"] {
        assert!(errors.contains_key(field), "missing error for {field}");
    }
    // Sanitization failures read as absent values.
    assert_eq!(body["errors"]["email"], json!(["Email is required"]));
    assert_eq!(body["errors"]["phone"], json!(["Phone is required"]));
}

#[actix_rt::test]
async fn malformed_json_is_rejected_without_details() {
    let app = TestApp::spawn().await;

    let response = app.post_raw("198.51.100.4", "{ not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid request format. Please check your submission.");
    assert!(body.get("errors").is_none());
}

#[actix_rt::test]
async fn sixth_request_in_window_is_rate_limited() {
    let app = TestApp::spawn().await;

    for _ in 0..5 {
        let response = app.post_contact("192.0.2.10", &valid_payload()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.post_contact("192.0.2.10", &valid_payload()).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Too many requests. Please try again later.");

    // Identical payloads are not deduplicated.
    assert_eq!(app.notifier.calls().len(), 5);

    let other = app.post_contact("192.0.2.11", &valid_payload()).await;
    assert_eq!(other.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn rate_limit_counts_requests_before_parsing() {
    let app = TestApp::spawn().await;

    for _ in 0..5 {
        let response = app.post_raw("192.0.2.20", "garbage").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let response = app.post_contact("192.0.2.20", &valid_payload()).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

fn oversized_payload() -> Value {
    let mut payload = valid_payload();
    payload["notes"] = json!("x".repeat(20 * 1024));
    payload
}

#[actix_rt::test]
async fn oversized_body_is_a_json_bad_request() {
    let app = TestApp::spawn().await;

    let response = app.post_contact("192.0.2.25", &oversized_payload()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid request format. Please check your submission.");
    assert!(app.notifier.calls().is_empty());
}

#[actix_rt::test]
async fn oversized_bodies_still_count_against_the_limit() {
    let app = TestApp::spawn().await;

    for _ in 0..5 {
        let response = app.post_contact("192.0.2.26", &oversized_payload()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let response = app.post_contact("192.0.2.26", &oversized_payload()).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Too many requests. Please try again later.");
    assert_eq!(app.state.contact_handler.stats.snapshot().rejected, 5);
}

#[actix_rt::test]
async fn forwarded_for_uses_first_hop() {
    let app = TestApp::spawn().await;

    for _ in 0..5 {
        app.post_contact("192.0.2.30, 10.0.0.1", &valid_payload()).await;
    }

    let response = app.post_contact("192.0.2.30", &valid_payload()).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[actix_rt::test]
async fn notification_failure_still_accepts_submission() {
    let app = TestApp::spawn_with_notifier(RecordingNotifier::failing()).await;

    let response = app.post_contact("192.0.2.40", &valid_payload()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(app.notifier.calls().len(), 1);
    assert_eq!(app.state.contact_handler.stats.snapshot().notification_failures, 1);
}

#[actix_rt::test]
async fn stalled_notification_times_out_and_still_accepts() {
    let app = TestApp::spawn_with_notifier(RecordingNotifier::stalling(Duration::from_secs(5))).await;

    let response = app.post_contact("192.0.2.41", &valid_payload()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.state.contact_handler.stats.snapshot().notification_failures, 1);
}

#[actix_rt::test]
async fn unknown_route_returns_json_404() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_json("/api/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_value(Field::Name, "Jane Doe");
    form.set_value(Field::Email, "jane@example.com");
    form.set_value(Field::Phone, "651-210-7253");
    form.set_value(Field::ServiceInterest, "Custom Package");
    form.set_value(Field::Message, "Looking for a full-room transformation.");
    form
}

#[actix_rt::test]
async fn client_submit_success_resets_form() {
    let app = TestApp::spawn().await;
    let api = ContactApiClient::new(app.client.clone(), &app.address);
    let mut form = filled_form();

    api.submit(&mut form).await.unwrap();

    match form.status() {
        SubmitStatus::Success { message, .. } => {
            assert!(message.starts_with("Thank you for your inquiry!"));
        }
        other => panic!("unexpected status {other:?}"),
    }
    assert_eq!(form.value(Field::Name), "");
    assert_eq!(app.notifier.calls()[0].project_type, None);
}

#[actix_rt::test]
async fn client_submit_error_keeps_values() {
    let app = TestApp::spawn().await;
    let api = ContactApiClient::new(app.client.clone(), &app.address);

    // Requests without forwarding headers share the "unknown" bucket.
    for _ in 0..5 {
        let mut form = filled_form();
        api.submit(&mut form).await.unwrap();
    }

    let mut form = filled_form();
    api.submit(&mut form).await.unwrap();

    assert_eq!(
        form.status(),
        &SubmitStatus::Error { message: "Too many requests. Please try again later.".to_string() }
    );
    assert_eq!(form.value(Field::Name), "Jane Doe");
}

#[actix_rt::test]
async fn client_never_posts_invalid_form() {
    let app = TestApp::spawn().await;
    let api = ContactApiClient::new(app.client.clone(), &app.address);
    let mut form = filled_form();
    form.set_value(Field::Message, "too short");

    assert!(api.submit(&mut form).await.is_err());
    assert!(app.notifier.calls().is_empty());
    assert_eq!(form.status(), &SubmitStatus::Idle);
}

#[actix_rt::test]
async fn unreadable_success_reply_keeps_the_form() {
    let address = spawn_stub(200, "text/plain", "ok").await;
    let api = ContactApiClient::new(reqwest::Client::new(), &address);
    let mut form = filled_form();

    api.submit(&mut form).await.unwrap();

    assert_eq!(
        form.status(),
        &SubmitStatus::Error { message: DEFAULT_ERROR_MESSAGE.to_string() }
    );
    assert_eq!(form.value(Field::Name), "Jane Doe");
    assert!(form.can_submit());
}

#[actix_rt::test]
async fn success_status_with_refusal_body_is_an_error() {
    let address = spawn_stub(
        200,
        "application/json",
        r#"{"success":false,"message":"Service paused"}"#,
    )
    .await;
    let api = ContactApiClient::new(reqwest::Client::new(), &address);
    let mut form = filled_form();

    api.submit(&mut form).await.unwrap();

    assert_eq!(
        form.status(),
        &SubmitStatus::Error { message: "Service paused".to_string() }
    );
    assert_eq!(form.value(Field::Message), "Looking for a full-room transformation.");
}

#[actix_rt::test]
async fn unreadable_failure_reply_uses_fallback_message() {
    let address = spawn_stub(502, "text/html", "<h1>Bad Gateway</h1>").await;
    let api = ContactApiClient::new(reqwest::Client::new(), &address);
    let mut form = filled_form();

    api.submit(&mut form).await.unwrap();

    assert_eq!(
        form.status(),
        &SubmitStatus::Error { message: "Failed to submit form".to_string() }
    );
}
