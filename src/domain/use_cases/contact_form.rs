use std::{
    collections::{BTreeMap, BTreeSet},
    time::{Duration, Instant},
};

use derive_more::Display;

use crate::{
    domain::rules::{Field, MESSAGE_MAX},
    entities::contact::ContactSubmission,
};

/// How long a success banner stays up before the form returns to idle.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

pub const DEFAULT_SUCCESS_MESSAGE: &str =
    "Thank you! We've received your inquiry and will contact you soon.";
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success { message: String, clears_at: Instant },
    Error { message: String },
}

#[derive(Debug, Display, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[display("Form has invalid fields")]
    Invalid,

    #[display("A submission is already in flight")]
    AlreadySubmitting,
}

/// Browser-side contact form: values, per-field errors and submission state.
#[derive(Debug, Clone)]
pub struct ContactForm {
    values: BTreeMap<Field, String>,
    errors: BTreeMap<Field, &'static str>,
    touched: BTreeSet<Field>,
    status: SubmitStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        ContactForm {
            values: BTreeMap::new(),
            errors: BTreeMap::new(),
            touched: BTreeSet::new(),
            status: SubmitStatus::Idle,
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Updates a value. Fields already blurred are re-checked immediately.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
        if self.touched.contains(&field) {
            self.check_field(field);
        }
    }

    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
        self.check_field(field);
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> &BTreeMap<Field, &'static str> {
        &self.errors
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Checks every field, marking them all touched.
    pub fn validate_all(&mut self) -> bool {
        for field in Field::ALL {
            self.touched.insert(field);
            self.check_field(field);
        }
        self.errors.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|f| f.check(self.value(*f)).is_empty())
    }

    pub fn can_submit(&self) -> bool {
        self.status != SubmitStatus::Submitting && self.is_valid()
    }

    pub fn message_length(&self) -> usize {
        self.value(Field::Message).chars().count()
    }

    /// Live counter shown under the message box, e.g. `"42/1000"`.
    pub fn message_counter(&self) -> String {
        format!("{}/{}", self.message_length(), MESSAGE_MAX)
    }

    /// Starts a submission. Returns the payload to send, with empty
    /// optional fields left out.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, SubmitBlocked> {
        if self.status == SubmitStatus::Submitting {
            return Err(SubmitBlocked::AlreadySubmitting);
        }
        if !self.validate_all() {
            return Err(SubmitBlocked::Invalid);
        }

        self.status = SubmitStatus::Submitting;
        Ok(self.payload())
    }

    pub fn payload(&self) -> ContactSubmission {
        let optional = |field: Field| Some(self.value(field).to_string()).filter(|v| !v.is_empty());

        ContactSubmission {
            name: self.value(Field::Name).to_string(),
            email: self.value(Field::Email).to_string(),
            phone: self.value(Field::Phone).to_string(),
            service_interest: self.value(Field::ServiceInterest).to_string(),
            project_type: optional(Field::ProjectType),
            budget_range: optional(Field::BudgetRange),
            message: self.value(Field::Message).to_string(),
        }
    }

    /// Server accepted: clear the form and show the banner for a while.
    pub fn complete_success(&mut self, message: Option<String>, now: Instant) {
        self.values.clear();
        self.errors.clear();
        self.touched.clear();
        self.status = SubmitStatus::Success {
            message: message.unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
            clears_at: now + SUCCESS_DISPLAY,
        };
    }

    /// Submission failed: keep what the user typed.
    pub fn complete_error(&mut self, message: Option<String>) {
        self.status = SubmitStatus::Error {
            message: message.unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
        };
    }

    /// Drops an expired success banner.
    pub fn tick(&mut self, now: Instant) {
        if let SubmitStatus::Success { clears_at, .. } = &self.status {
            if now >= *clears_at {
                self.status = SubmitStatus::Idle;
            }
        }
    }

    fn check_field(&mut self, field: Field) {
        match field.check(self.value(field)).first() {
            Some(&message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }
}
