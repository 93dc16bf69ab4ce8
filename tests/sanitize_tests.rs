use ledream_backend::utils::sanitize::{
    sanitize_email, sanitize_object, sanitize_phone, sanitize_string, sanitize_value,
};
use serde_json::json;

#[test]
fn script_elements_are_removed_with_their_content() {
    assert_eq!(sanitize_string("<script>alert(1)</script>Hello"), "Hello");
    assert_eq!(sanitize_string("<SCRIPT type=\"x\">\nsteal()\n</Script >Hi"), "Hi");
    assert_eq!(sanitize_string("<style>body{}</style>Styled"), "Styled");
}

#[test]
fn tags_are_stripped_but_text_is_kept() {
    assert_eq!(sanitize_string("  <p>Hello <b>world</b></p>  "), "Hello world");
    assert_eq!(sanitize_string("1 < 2"), "1  2");
    assert_eq!(sanitize_string("a < b > c"), "a  c");
    assert_eq!(sanitize_string("Tom & Jerry"), "Tom & Jerry");
}

#[test]
fn script_vectors_are_neutralized() {
    assert_eq!(sanitize_string("JavaScript:alert(1)"), "alert(1)");
    assert_eq!(sanitize_string("x onMouseOver = steal()"), "x  steal()");
    assert_eq!(sanitize_string("<img src=x onerror=alert(1)>ok"), "ok");
}

#[test]
fn non_string_values_become_empty() {
    assert_eq!(sanitize_value(&json!(12)), "");
    assert_eq!(sanitize_value(&json!(null)), "");
    assert_eq!(sanitize_value(&json!(["x"])), "");
    assert_eq!(sanitize_value(&json!("<i>ok</i>")), "ok");
}

#[test]
fn emails_are_lowercased_or_rejected() {
    assert_eq!(sanitize_email("  USER@Example.COM "), "user@example.com");
    assert_eq!(sanitize_email("not-an-email"), "");
    assert_eq!(sanitize_email("two words@example.com"), "");
    assert_eq!(sanitize_email("<b>a@b.co</b>"), "a@b.co");
}

#[test]
fn phones_are_compacted_or_rejected() {
    let phone = sanitize_phone("(651) 210-7253");
    assert_eq!(phone, "(651)210-7253");
    assert!(phone.chars().filter(char::is_ascii_digit).count() >= 10);

    assert_eq!(sanitize_phone("+1 651.210.7253"), "+16512107253");
    assert_eq!(sanitize_phone("abc"), "");
    assert_eq!(sanitize_phone("555-1234"), "");
}

#[test]
fn objects_are_sanitized_recursively() {
    let input = json!({
        "name": "<b>Ann</b>",
        "count": 3,
        "flag": true,
        "nested": { "note": "<script>x()</script>hi", "empty": null },
        "list": ["<i>a</i>", 1, { "deep": "javascript:b" }, ["<u>c</u>"]]
    });

    let output = sanitize_object(input);

    assert_eq!(
        output,
        json!({
            "name": "Ann",
            "count": 3,
            "flag": true,
            "nested": { "note": "hi", "empty": null },
            "list": ["a", 1, { "deep": "b" }, ["c"]]
        })
    );
}
