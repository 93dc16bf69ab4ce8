use std::panic::AssertUnwindSafe;

use actix_web::{post, web, HttpRequest, HttpResponse};
use futures::{FutureExt, StreamExt};

use crate::{
    entities::contact::{ContactResponse, SubmissionOutcome},
    errors::ContactError,
    utils::get_client_ip::get_client_ip,
    AppState,
};

#[post("/contact")]
pub async fn submit_contact(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Payload,
) -> Result<HttpResponse, ContactError> {
    let client_ip = get_client_ip(&req);

    let outcome = AssertUnwindSafe(run_pipeline(&state, &client_ip, payload))
        .catch_unwind()
        .await
        .map_err(|_| {
            tracing::error!(client = %client_ip, "Contact submission handler panicked");
            ContactError::InternalError("handler panicked".into())
        })??;

    Ok(HttpResponse::Ok().json(ContactResponse::accepted(outcome.message())))
}

async fn run_pipeline(
    state: &AppState,
    client_ip: &str,
    payload: web::Payload,
) -> Result<SubmissionOutcome, ContactError> {
    let handler = &state.contact_handler;
    handler.admit(client_ip).await?;

    let body = read_capped(payload, state.max_body_bytes)
        .await
        .map_err(|reason| handler.reject_unreadable(client_ip, &reason))?;

    handler.process(client_ip, &body).await
}

/// Reads the whole body, failing once it grows past `limit` bytes. The rest
/// of an oversized body is drained so the connection stays usable.
async fn read_capped(mut payload: web::Payload, limit: usize) -> Result<web::BytesMut, String> {
    let mut body = web::BytesMut::new();
    let mut oversized = false;

    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| e.to_string())?;
        if oversized {
            continue;
        }
        if body.len() + chunk.len() > limit {
            oversized = true;
            body.clear();
            continue;
        }
        body.extend_from_slice(&chunk);
    }

    if oversized {
        return Err(format!("body exceeds {} bytes", limit));
    }
    Ok(body)
}
