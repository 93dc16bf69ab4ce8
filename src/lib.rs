use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod content;
pub mod graceful_shutdown;
pub mod background_task;

pub use domain::{entities, rules, use_cases};
pub use interfaces::{handlers, notifier, routes};
pub use infrastructure::{client, limiter, utils};

use limiter::rate_limiter::{InMemoryRateLimiter, RateLimitStore};
use notifier::{ContactNotifier, LogNotifier};
use use_cases::contact::ContactHandler;

pub struct AppState {
    pub contact_handler: ContactHandler,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Self {
        let limiter = InMemoryRateLimiter::new(
            config.rate_limit.max_requests,
            config.rate_limit.window(),
            config.rate_limit.cleanup_probability,
        );
        let notifier = LogNotifier::new(config.notification_delay());

        Self::with_collaborators(config, Arc::new(limiter), Arc::new(notifier))
    }

    /// Builds state around caller-supplied collaborators.
    pub fn with_collaborators(
        config: &settings::AppConfig,
        limiter: Arc<dyn RateLimitStore>,
        notifier: Arc<dyn ContactNotifier>,
    ) -> Self {
        AppState {
            contact_handler: ContactHandler::new(limiter, notifier, config.notification_timeout()),
            max_body_bytes: config.max_body_bytes,
        }
    }
}
