use std::time::Instant;

use reqwest::Client;

use crate::{
    entities::contact::ContactResponse,
    use_cases::contact_form::{ContactForm, SubmitBlocked},
};

const FAILED_MESSAGE: &str = "Failed to submit form";

/// Posts the contact form to `/api/contact` and drives its state.
#[derive(Clone)]
pub struct ContactApiClient {
    client: Client,
    endpoint: String,
}

impl ContactApiClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        ContactApiClient {
            client,
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
        }
    }

    /// Submits the form once. Invalid or already-submitting forms never
    /// reach the network.
    pub async fn submit(&self, form: &mut ContactForm) -> Result<(), SubmitBlocked> {
        let payload = form.begin_submit()?;

        let result = self.client.post(&self.endpoint).json(&payload).send().await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Contact request failed: {}", e);
                form.complete_error(None);
                return Ok(());
            }
        };

        let status = response.status();
        let body = match response.json::<ContactResponse>().await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!(%status, "Unreadable contact response: {}", e);
                None
            }
        };

        match body {
            Some(body) if status.is_success() && body.success => {
                let message = Some(body.message).filter(|m| !m.is_empty());
                form.complete_success(message, Instant::now());
            }
            Some(body) if !status.is_success() => {
                let message = Some(body.message)
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| FAILED_MESSAGE.to_string());
                form.complete_error(Some(message));
            }
            Some(body) => {
                form.complete_error(Some(body.message).filter(|m| !m.is_empty()));
            }
            None if status.is_success() => form.complete_error(None),
            None => form.complete_error(Some(FAILED_MESSAGE.to_string())),
        }

        Ok(())
    }
}
