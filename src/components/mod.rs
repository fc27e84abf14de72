//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod item_card;
mod item_list;

pub use header::Header;
pub use item_card::{build_cards, ItemCard};
pub use item_list::ItemList;
