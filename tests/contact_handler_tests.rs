use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use ledream_backend::{
    entities::contact::{ContactSubmission, SubmissionOutcome},
    errors::{ContactError, NotifyError},
    limiter::rate_limiter::InMemoryRateLimiter,
    notifier::{ContactNotifier, LogNotifier},
    use_cases::contact::ContactHandler,
};
use mockall::mock;
use serde_json::json;

mock! {
    pub Notifier {}

    #[async_trait]
    impl ContactNotifier for Notifier {
        async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError>;
    }
}

fn handler_with(notifier: MockNotifier) -> ContactHandler {
    ContactHandler::new(
        Arc::new(InMemoryRateLimiter::new(5, Duration::from_secs(3600), 0.0)),
        Arc::new(notifier),
        Duration::from_secs(1),
    )
}

fn body(value: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&value).unwrap()
}

fn valid_body() -> Vec<u8> {
    body(json!({
        "name": "  Marcus Lee  ",
        "email": "  MARCUS@Example.COM ",
        "phone": "+1 (651) 210-7253",
        "serviceInterest": "The Legend Package ($15k+)",
        "budgetRange": "$15k+",
        "projectType": "",
        "message": "Whole venue, <i>three</i> rooms, onclick=go() please."
    }))
}

#[actix_rt::test]
async fn dispatches_sanitized_values_exactly_once() {
    let mut notifier = MockNotifier::new();
    notifier
        .expect_notify()
        .withf(|s| {
            s.name == "Marcus Lee"
                && s.email == "marcus@example.com"
                && s.phone == "+1(651)210-7253"
                && s.budget_range.as_deref() == Some("$15k+")
                && s.project_type.is_none()
                && s.message == "Whole venue, three rooms, go() please."
        })
        .times(1)
        .returning(|_| Ok(()));

    let handler = handler_with(notifier);
    let outcome = handler.submit("10.1.1.1", &valid_body()).await.unwrap();

    assert!(matches!(outcome, SubmissionOutcome::Accepted { .. }));
    assert_eq!(handler.stats.snapshot().accepted, 1);
}

#[actix_rt::test]
async fn honeypot_skips_every_later_stage() {
    let mut notifier = MockNotifier::new();
    notifier.expect_notify().never();

    let handler = handler_with(notifier);
    let outcome = handler
        .submit("10.1.1.2", &body(json!({ "website": "http://spam.example" })))
        .await
        .unwrap();

    assert_eq!(outcome, SubmissionOutcome::Discarded);
    assert_eq!(outcome.message(), "Thank you for your submission.");
    let stats = handler.stats.snapshot();
    assert_eq!((stats.honeypot, stats.accepted, stats.rejected), (1, 0, 0));
}

#[actix_rt::test]
async fn non_string_honeypot_is_ignored() {
    let mut notifier = MockNotifier::new();
    notifier.expect_notify().never();

    let handler = handler_with(notifier);
    let result = handler.submit("10.1.1.3", &body(json!({ "website": 1 }))).await;

    assert!(matches!(result, Err(ContactError::ValidationError(_))));
}

#[actix_rt::test]
async fn non_object_body_fails_validation() {
    let mut notifier = MockNotifier::new();
    notifier.expect_notify().never();

    let handler = handler_with(notifier);
    let result = handler.submit("10.1.1.4", b"[1, 2, 3]").await;

    match result {
        Err(ContactError::ValidationError(errors)) => {
            assert!(errors.contains_key("name"));
            assert!(errors.contains_key("message"));
            assert!(!errors.contains_key("projectType"));
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[actix_rt::test]
async fn notifier_error_is_swallowed() {
    let mut notifier = MockNotifier::new();
    notifier
        .expect_notify()
        .times(1)
        .returning(|_| Err(NotifyError::Rejected("bad sender".into())));

    let handler = handler_with(notifier);
    let outcome = handler.submit("10.1.1.5", &valid_body()).await;

    assert!(outcome.is_ok());
    assert_eq!(handler.stats.snapshot().notification_failures, 1);
}

#[actix_rt::test]
async fn limiter_blocks_after_five_requests() {
    let mut notifier = MockNotifier::new();
    notifier.expect_notify().times(5).returning(|_| Ok(()));

    let handler = handler_with(notifier);
    for _ in 0..5 {
        assert!(handler.submit("10.1.1.6", &valid_body()).await.is_ok());
    }

    let blocked = handler.submit("10.1.1.6", &valid_body()).await;
    assert!(matches!(blocked, Err(ContactError::RateLimited)));
    assert_eq!(handler.stats.snapshot().rate_limited, 1);
}

#[test]
fn client_messages_never_leak_internals() {
    let error = ContactError::InternalError("db password is hunter2".into());
    assert_eq!(error.client_message(), "An unexpected error occurred. Please try again later.");

    let missing = ContactError::MissingRequiredFields(vec!["name".into()]);
    assert_eq!(
        missing.client_message(),
        "Missing required fields. Please complete all required fields."
    );
}

#[actix_rt::test]
async fn log_notifier_accepts_every_submission() {
    let notifier = LogNotifier::new(Duration::ZERO);
    let submission = ContactSubmission {
        name: "Ann".into(),
        message: "Hello there, lights please.".into(),
        ..Default::default()
    };

    assert!(notifier.notify(&submission).await.is_ok());
}
