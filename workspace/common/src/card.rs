use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Everything a storefront needs to draw one product tile.
///
/// All fields are always present: missing or broken source data has already
/// been replaced by fallbacks when the card is built.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ProductCard {
    /// Absolute image URL, or the configured placeholder path.
    pub image_url: String,
    /// Alternative text for the image.
    pub alt_text: String,
    /// Display name of the product.
    pub title: String,
    pub description: String,
    /// Price already formatted for display, e.g. `R$ 19,99`.
    pub price_display: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_card_serializes_every_field() {
        let card = ProductCard {
            image_url: "/placeholder.png".to_string(),
            alt_text: "Camiseta".to_string(),
            title: "Camiseta".to_string(),
            description: "Algodão".to_string(),
            price_display: "R$ 19,99".to_string(),
        };

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["image_url"], "/placeholder.png");
        assert_eq!(json["alt_text"], "Camiseta");
        assert_eq!(json["title"], "Camiseta");
        assert_eq!(json["description"], "Algodão");
        assert_eq!(json["price_display"], "R$ 19,99");
    }
}
