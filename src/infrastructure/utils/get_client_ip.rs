use actix_web::{http::header::HeaderMap, HttpRequest};

pub const UNKNOWN_CLIENT: &str = "unknown";

/// Resolve the key used for per-client rate limiting.
///
/// Prefers the first `x-forwarded-for` hop, then `x-real-ip`. Requests
/// carrying neither share the `"unknown"` bucket.
pub fn get_client_ip(req: &HttpRequest) -> String {
    client_ip_from_headers(req.headers())
}

pub fn client_ip_from_headers(headers: &HeaderMap) -> String {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .filter(|s| !s.trim().is_empty())
    };

    if let Some(forwarded) = header_value("x-forwarded-for") {
        return forwarded.split(',').next().unwrap_or("").trim().to_string();
    }

    if let Some(real_ip) = header_value("x-real-ip") {
        return real_ip.trim().to_string();
    }

    UNKNOWN_CLIENT.to_string()
}
