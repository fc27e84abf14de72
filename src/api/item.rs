//! Item Endpoints

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::models::{Item, ItemsResponse};
use super::get_json;

/// GET `{server}/items`
pub async fn list_items(config: &AppConfig) -> Result<Vec<Item>, FetchError> {
    let body = get_json(&config.items_url()).await?;
    decode_items(&body)
}

/// Decode an items envelope; a missing `items` field is an empty list
pub fn decode_items(body: &str) -> Result<Vec<Item>, FetchError> {
    let resp: ItemsResponse = serde_json::from_str(body)?;
    Ok(resp.items)
}
