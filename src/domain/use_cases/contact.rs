use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::contact::{ContactSubmission, SubmissionOutcome},
    errors::{ContactError, NotifyError},
    limiter::rate_limiter::RateLimitStore,
    notifier::ContactNotifier,
};

/// Counters for every way a submission can leave the pipeline.
/// Honeypot discards are kept apart from real accepts.
#[derive(Debug, Default)]
pub struct SubmissionStats {
    accepted: AtomicU64,
    discarded: AtomicU64,
    rate_limited: AtomicU64,
    rejected: AtomicU64,
    notification_failures: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionStatsSnapshot {
    pub accepted: u64,
    pub honeypot: u64,
    pub rate_limited: u64,
    pub rejected: u64,
    pub notification_failures: u64,
}

impl SubmissionStats {
    pub fn snapshot(&self) -> SubmissionStatsSnapshot {
        SubmissionStatsSnapshot {
            accepted: self.accepted.load(Ordering::Relaxed),
            honeypot: self.discarded.load(Ordering::Relaxed),
            rate_limited: self.rate_limited.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            notification_failures: self.notification_failures.load(Ordering::Relaxed),
        }
    }

    fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

pub struct ContactHandler {
    pub limiter: Arc<dyn RateLimitStore>,
    pub notifier: Arc<dyn ContactNotifier>,
    pub notification_timeout: Duration,
    pub stats: SubmissionStats,
}

impl ContactHandler {
    pub fn new(
        limiter: Arc<dyn RateLimitStore>,
        notifier: Arc<dyn ContactNotifier>,
        notification_timeout: Duration,
    ) -> Self {
        ContactHandler {
            limiter,
            notifier,
            notification_timeout,
            stats: SubmissionStats::default(),
        }
    }

    /// Runs one contact submission through the gate.
    ///
    /// Stages run in order and the first one that objects ends the request:
    /// rate limit, JSON parse, honeypot, sanitize, validate, required-field
    /// re-check, notification. Notification failures never reject.
    pub async fn submit(&self, client_key: &str, body: &[u8]) -> Result<SubmissionOutcome, ContactError> {
        self.admit(client_key).await?;
        self.process(client_key, body).await
    }

    /// Counts the request against the client's window. Runs before the body
    /// is read.
    pub async fn admit(&self, client_key: &str) -> Result<(), ContactError> {
        let decision = self.limiter.check(client_key).await;
        if !decision.allowed {
            SubmissionStats::bump(&self.stats.rate_limited);
            tracing::warn!(client = %client_key, reset_time = %decision.reset_time, "Contact submission rate limited");
            return Err(ContactError::RateLimited);
        }
        Ok(())
    }

    /// Rejects an admitted request whose body could not be read in full.
    pub fn reject_unreadable(&self, client_key: &str, reason: &str) -> ContactError {
        SubmissionStats::bump(&self.stats.rejected);
        tracing::info!(client = %client_key, "Unreadable contact body: {}", reason);
        ContactError::MalformedRequest
    }

    /// Every stage after the rate limit, for a request already admitted.
    pub async fn process(&self, client_key: &str, body: &[u8]) -> Result<SubmissionOutcome, ContactError> {
        let payload: Value = serde_json::from_slice(body).map_err(|e| {
            SubmissionStats::bump(&self.stats.rejected);
            tracing::debug!(client = %client_key, "Unparseable contact body: {}", e);
            ContactError::MalformedRequest
        })?;

        if honeypot_tripped(&payload) {
            SubmissionStats::bump(&self.stats.discarded);
            tracing::info!(client = %client_key, outcome = "honeypot", "Discarded contact submission");
            return Ok(SubmissionOutcome::Discarded);
        }

        let submission = ContactSubmission::from_untrusted(&payload);

        if let Err(errors) = submission.validate() {
            SubmissionStats::bump(&self.stats.rejected);
            let error = ContactError::from(errors);
            tracing::info!(client = %client_key, "{}", error);
            return Err(error);
        }

        let missing = submission.missing_required();
        if !missing.is_empty() {
            SubmissionStats::bump(&self.stats.rejected);
            let fields = missing.iter().map(|f| f.wire_name().to_string()).collect();
            return Err(ContactError::MissingRequiredFields(fields));
        }

        let reference = Uuid::new_v4();
        if let Err(e) = self.dispatch(&submission).await {
            SubmissionStats::bump(&self.stats.notification_failures);
            tracing::error!(%reference, "Failed to send contact notification: {}", e);
        }

        SubmissionStats::bump(&self.stats.accepted);
        tracing::info!(%reference, client = %client_key, outcome = "accepted", "Accepted contact submission");

        Ok(SubmissionOutcome::Accepted { reference })
    }

    async fn dispatch(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        tokio::time::timeout(self.notification_timeout, self.notifier.notify(submission))
            .await
            .map_err(|_| NotifyError::TimedOut(self.notification_timeout))?
    }
}

fn honeypot_tripped(payload: &Value) -> bool {
    payload
        .get("website")
        .and_then(Value::as_str)
        .is_some_and(|website| !website.is_empty())
}
