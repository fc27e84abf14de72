//! Backend HTTP Bindings
//!
//! Frontend bindings to the storefront API, organized by domain.

mod item;

use gloo_net::http::Request;
use leptos::logging::log;
use web_sys::RequestMode;

use crate::error::FetchError;
use crate::models::ItemsResponse;

// Re-export all public items
pub use item::*;

/// GET `url` as JSON in CORS mode, returning the raw body of a 2xx response
async fn get_json(url: &str) -> Result<String, FetchError> {
    log!("[API] GET {}", url);
    let response = Request::get(url)
        .mode(RequestMode::Cors)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    check_status(status, &body)?;
    Ok(body)
}

/// Map a non-2xx status to `FetchError::Status`, keeping the backend's
/// `message` when the body carries one
fn check_status(status: u16, body: &str) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let message = serde_json::from_str::<ItemsResponse>(body)
        .ok()
        .and_then(|b| b.message);
    Err(FetchError::Status { status, message })
}
