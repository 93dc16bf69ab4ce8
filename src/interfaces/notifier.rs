use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::{entities::contact::ContactSubmission, errors::NotifyError};

/// Delivers an accepted submission to whoever follows up on it.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError>;
}

/// Writes submissions to the operational log. Stands in for an email or
/// CRM provider.
pub struct LogNotifier {
    delay: Duration,
}

impl LogNotifier {
    pub fn new(delay: Duration) -> Self {
        LogNotifier { delay }
    }
}

#[async_trait]
impl ContactNotifier for LogNotifier {
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            phone = %submission.phone,
            service_interest = %submission.service_interest,
            project_type = submission.project_type.as_deref().unwrap_or("Not specified"),
            budget_range = submission.budget_range.as_deref().unwrap_or("Not specified"),
            message = %submission.message,
            timestamp = %Utc::now().to_rfc3339(),
            "New contact form submission"
        );

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(())
    }
}
