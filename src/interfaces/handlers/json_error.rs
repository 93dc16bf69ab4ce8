use actix_web::{http::StatusCode, HttpResponse};

use crate::entities::contact::ContactResponse;

pub fn json_error(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ContactResponse::rejected(message, None))
}

pub async fn not_found() -> HttpResponse {
    json_error(StatusCode::NOT_FOUND, "Resource not found")
}
