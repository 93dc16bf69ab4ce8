//! Field constraints for the contact form.
//!
//! Both the server-side validator and the client form model check values
//! through [`Field::check`], so the two surfaces cannot drift apart.

use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 100;
pub const EMAIL_MIN: usize = 5;
pub const EMAIL_MAX: usize = 255;
pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX: usize = 20;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 1000;

pub const SERVICE_INTERESTS: [&str; 5] = [
    "General Inquiry",
    "The Spark Package ($5k+)",
    "The Spectacle Package ($10k+)",
    "The Legend Package ($15k+)",
    "Custom Package",
];

pub const PROJECT_TYPES: [&str; 4] = ["Residential", "Commercial", "Event", "Other"];

pub const BUDGET_RANGES: [&str; 5] = [
    "Under $5k",
    "$5k - $10k",
    "$10k - $15k",
    "$15k+",
    "Not sure yet",
];

pub static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// A leading `+` is tolerated because the phone sanitizer keeps country codes.
static PHONE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]+$").expect("phone pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    ServiceInterest,
    ProjectType,
    BudgetRange,
    Message,
    Website,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::ServiceInterest,
        Field::ProjectType,
        Field::BudgetRange,
        Field::Message,
        Field::Website,
    ];

    /// Key used on the wire and in the `errors` map.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::ServiceInterest => "serviceInterest",
            Field::ProjectType => "projectType",
            Field::BudgetRange => "budgetRange",
            Field::Message => "message",
            Field::Website => "website",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            Field::Name | Field::Email | Field::Phone | Field::ServiceInterest | Field::Message
        )
    }

    /// Returns every rule the value breaks, in table order. Empty optional
    /// fields are always accepted.
    pub fn check(self, value: &str) -> Vec<&'static str> {
        let mut errors = Vec::new();
        let len = value.chars().count();
        let trimmed_len = value.trim().chars().count();

        match self {
            Field::Name => {
                if trimmed_len < NAME_MIN {
                    errors.push("Name must be at least 2 characters");
                }
                if len > NAME_MAX {
                    errors.push("Name must be less than 100 characters");
                }
            }
            Field::Email => {
                if value.is_empty() {
                    errors.push("Email is required");
                    return errors;
                }
                if !EMAIL_PATTERN.is_match(value) {
                    errors.push("Please enter a valid email address");
                }
                if len < EMAIL_MIN {
                    errors.push("Email must be at least 5 characters");
                }
                if len > EMAIL_MAX {
                    errors.push("Email must be less than 255 characters");
                }
            }
            Field::Phone => {
                if value.is_empty() {
                    errors.push("Phone is required");
                    return errors;
                }
                if !PHONE_CHARS.is_match(value) {
                    errors.push("Please enter a valid phone number");
                }
                if value.chars().filter(char::is_ascii_digit).count() < PHONE_MIN_DIGITS {
                    errors.push("Phone number must be at least 10 digits");
                }
                if len > PHONE_MAX {
                    errors.push("Phone number must be less than 20 characters");
                }
            }
            Field::ServiceInterest => {
                if !SERVICE_INTERESTS.contains(&value) {
                    errors.push("Please select a valid service interest");
                }
            }
            Field::ProjectType => {
                if !value.is_empty() && !PROJECT_TYPES.contains(&value) {
                    errors.push("Please select a valid project type");
                }
            }
            Field::BudgetRange => {
                if !value.is_empty() && !BUDGET_RANGES.contains(&value) {
                    errors.push("Please select a valid budget range");
                }
            }
            Field::Message => {
                if trimmed_len < MESSAGE_MIN {
                    errors.push("Message must be at least 10 characters");
                }
                if len > MESSAGE_MAX {
                    errors.push("Message must be less than 1000 characters");
                }
            }
            Field::Website => {
                if !value.is_empty() {
                    errors.push("This field should be empty");
                }
            }
        }

        errors
    }
}
