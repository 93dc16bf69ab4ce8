use std::{borrow::Cow, collections::BTreeMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    domain::rules::Field,
    utils::sanitize::{sanitize_email, sanitize_phone, sanitize_value},
};

/// Field name to every message that applies to it.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// A contact submission after server-side sanitization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_interest: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    /// Builds a sanitized submission from an untrusted JSON body. Missing or
    /// non-string fields become empty; empty optional fields become `None`.
    pub fn from_untrusted(body: &Value) -> Self {
        let text = |field: Field| body.get(field.wire_name()).map(sanitize_value).unwrap_or_default();
        let raw = |field: Field| body.get(field.wire_name()).and_then(Value::as_str).unwrap_or("");
        let optional = |field: Field| Some(text(field)).filter(|v| !v.is_empty());

        ContactSubmission {
            name: text(Field::Name),
            email: sanitize_email(raw(Field::Email)),
            phone: sanitize_phone(raw(Field::Phone)),
            service_interest: text(Field::ServiceInterest),
            project_type: optional(Field::ProjectType),
            budget_range: optional(Field::BudgetRange),
            message: text(Field::Message),
        }
    }

    pub fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Phone => Some(&self.phone),
            Field::ServiceInterest => Some(&self.service_interest),
            Field::ProjectType => self.project_type.as_deref(),
            Field::BudgetRange => self.budget_range.as_deref(),
            Field::Message => Some(&self.message),
            Field::Website => None,
        }
    }

    /// Required fields that ended up empty after sanitization.
    pub fn missing_required(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| field.is_required())
            .filter(|field| self.value(*field).is_none_or(str::is_empty))
            .collect()
    }
}

impl Validate for ContactSubmission {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for field in Field::ALL {
            let Some(value) = self.value(field) else {
                continue;
            };
            for message in field.check(value) {
                errors.add(
                    field.wire_name(),
                    ValidationError::new("invalid").with_message(Cow::Borrowed(message)),
                );
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Body returned by `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ContactResponse {
    pub fn accepted(message: impl Into<String>) -> Self {
        ContactResponse {
            success: true,
            message: message.into(),
            errors: None,
        }
    }

    pub fn rejected(message: impl Into<String>, errors: Option<FieldErrors>) -> Self {
        ContactResponse {
            success: false,
            message: message.into(),
            errors,
        }
    }
}

/// How an accepted request left the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted { reference: uuid::Uuid },
    /// Honeypot tripped: reported as success, nothing processed.
    Discarded,
}

impl SubmissionOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SubmissionOutcome::Accepted { .. } => {
                "Thank you for your inquiry! We've received your message and will contact you soon."
            }
            SubmissionOutcome::Discarded => "Thank you for your submission.",
        }
    }
}
