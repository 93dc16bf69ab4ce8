use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::domain::rules::EMAIL_PATTERN;

static SCRIPT_ELEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("script pattern compiles")
});
static STYLE_ELEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").expect("style pattern compiles")
});
static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern compiles"));
static ANGLE_BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[<>]").expect("bracket pattern compiles"));
static JS_URI: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)javascript:").expect("uri pattern compiles"));
static EVENT_HANDLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)on\w+\s*=").expect("handler pattern compiles"));

static PHONE_DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\d+\s\-()]").expect("phone filter compiles"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s").expect("whitespace compiles"));
static PHONE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+?1)?[\d\-()]{10,}$").expect("phone shape compiles"));

/// Strips markup and script vectors from free text.
///
/// Script and style elements are dropped together with their content, every
/// other tag is removed while its text is kept.
pub fn sanitize_string(input: &str) -> String {
    let without_scripts = SCRIPT_ELEMENT.replace_all(input, "");
    let without_styles = STYLE_ELEMENT.replace_all(&without_scripts, "");
    let without_tags = HTML_TAG.replace_all(&without_styles, "");
    let without_brackets = ANGLE_BRACKETS.replace_all(&without_tags, "");
    let without_uris = JS_URI.replace_all(&without_brackets, "");
    let without_handlers = EVENT_HANDLER.replace_all(&without_uris, "");

    without_handlers.trim().to_string()
}

/// Sanitizes a JSON value that should hold text. Anything but a string
/// yields an empty string.
pub fn sanitize_value(value: &Value) -> String {
    match value {
        Value::String(s) => sanitize_string(s),
        _ => String::new(),
    }
}

/// Lowercased, sanitized email, or empty when it is not `local@domain.tld`.
pub fn sanitize_email(input: &str) -> String {
    let sanitized = sanitize_string(input).to_lowercase();
    let sanitized = sanitized.trim();

    if EMAIL_PATTERN.is_match(sanitized) {
        sanitized.to_string()
    } else {
        String::new()
    }
}

/// Keeps digits and phone punctuation, drops whitespace, and returns an
/// empty string unless at least ten digit-like characters remain.
pub fn sanitize_phone(input: &str) -> String {
    let filtered = PHONE_DISALLOWED.replace_all(input, "");
    let compact = WHITESPACE.replace_all(&filtered, "");

    if PHONE_SHAPE.is_match(&compact) {
        compact.into_owned()
    } else {
        String::new()
    }
}

/// Recursively sanitizes every string inside objects and arrays. Numbers,
/// booleans and nulls pass through untouched.
pub fn sanitize_object(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(sanitize_string(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize_object).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, v)| (key, sanitize_object(v)))
                .collect::<Map<String, Value>>(),
        ),
        other => other,
    }
}
