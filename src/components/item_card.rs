//! Item Card Component
//!
//! One entry of the item grid: image, name and category.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::models::Item;

/// Everything a card renders, resolved against the config.
///
/// Also the list key, so a changed row under the same id re-renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemCardData {
    pub id: i64,
    pub image_src: String,
    pub name_label: String,
    pub category_label: String,
}

impl ItemCardData {
    pub fn new(config: &AppConfig, item: &Item) -> Self {
        let image_src = if item.has_image() {
            config.image_url(&item.image)
        } else {
            config.placeholder_image().to_string()
        };

        Self {
            id: item.id,
            image_src,
            name_label: format!("Name: {}", item.name),
            category_label: format!("Category: {}", item.category),
        }
    }
}

/// Map items to cards, keeping response order
pub fn build_cards(config: &AppConfig, items: &[Item]) -> Vec<ItemCardData> {
    items.iter().map(|item| ItemCardData::new(config, item)).collect()
}

#[component]
pub fn ItemCard(card: ItemCardData) -> impl IntoView {
    view! {
        <li class="ItemList">
            <img src=card.image_src />
            <p>
                <span>{card.name_label}</span>
                <br />
                <span>{card.category_label}</span>
            </p>
        </li>
    }
}
