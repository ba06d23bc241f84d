//! Turns catalog rows into display records.

pub mod card;
pub mod error;

pub use card::{
    DEFAULT_PLACEHOLDER_IMAGE, FALLBACK_TITLE, ProductCardSelector, display_title,
    resolve_image_url, select_product_card,
};
pub use error::DisplayError;
