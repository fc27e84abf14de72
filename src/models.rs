//! Frontend Models
//!
//! Data structures matching the backend's JSON.

use serde::Deserialize;

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Image filename on the server, empty when the item has none
    #[serde(default)]
    pub image: String,
}

impl Item {
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}

/// Response envelope returned by the backend.
///
/// `items` is omitted when the list is empty, `message` carries
/// status or error text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_items_response() {
        let body = r#"{"items":[{"id":1,"name":"Book","category":"Media","image":""}]}"#;
        let resp: ItemsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.items.len(), 1);
        assert_eq!(resp.items[0].name, "Book");
        assert!(!resp.items[0].has_image());
        assert_eq!(resp.message, None);
    }

    #[test]
    fn test_missing_items_is_empty() {
        let resp: ItemsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.items.is_empty());
    }

    #[test]
    fn test_missing_image_defaults_to_empty() {
        let item: Item = serde_json::from_str(r#"{"id":7,"name":"Pen","category":"Office"}"#).unwrap();
        assert_eq!(item.image, "");
        assert!(!item.has_image());
    }
}
