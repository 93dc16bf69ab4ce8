use actix_web::{get, HttpResponse, Responder};

use crate::content::SITE;

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Welcome to the {} API!", SITE.name),
        "tagline": SITE.tagline,
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ["/api/contact", "/api/content", "/api/health"]
    }))
}
