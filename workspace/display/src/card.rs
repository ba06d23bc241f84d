use common::{ProductCard, format_cents_brl};
use model::ProductWithVariants;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::error::{DisplayError, Result};

/// Image shown when a variant has no usable picture URL.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/placeholder.png";

/// Title used when neither the variant nor the product has a name.
pub const FALLBACK_TITLE: &str = "Produto";

/// Builds product cards from products and their variants.
///
/// The selector only holds the placeholder image path, which is process-wide
/// configuration; card selection itself is a pure function of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardSelector {
    placeholder_image: String,
}

impl Default for ProductCardSelector {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_IMAGE)
    }
}

impl ProductCardSelector {
    pub fn new(placeholder_image: impl Into<String>) -> Self {
        Self {
            placeholder_image: placeholder_image.into(),
        }
    }

    pub fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }

    /// Builds the card for one product from its first variant.
    ///
    /// # Errors
    ///
    /// [`DisplayError::MissingVariant`] when the product has no variants.
    pub fn select(&self, item: &ProductWithVariants) -> Result<ProductCard> {
        select_product_card(item, &self.placeholder_image)
    }

    /// Builds cards for a listing, keeping input order.
    ///
    /// Products without variants cannot be priced and are left out of the
    /// listing.
    #[instrument(skip(self, items), fields(items = items.len()))]
    pub fn select_many(&self, items: &[ProductWithVariants]) -> Vec<ProductCard> {
        let cards: Vec<ProductCard> = items
            .iter()
            .filter_map(|item| match self.select(item) {
                Ok(card) => Some(card),
                Err(e) => {
                    warn!(slug = %item.product.slug, "Skipping product card: {}", e);
                    None
                }
            })
            .collect();
        debug!("Built {} of {} product cards", cards.len(), items.len());
        cards
    }
}

/// Builds the card for `item` from its first variant, falling back to
/// `placeholder_image` when the variant's image URL is not an absolute URL.
pub fn select_product_card(
    item: &ProductWithVariants,
    placeholder_image: &str,
) -> Result<ProductCard> {
    let product = &item.product;
    let variant = item
        .first_variant()
        .ok_or_else(|| DisplayError::MissingVariant {
            product_id: product.id.to_string(),
        })?;

    let title = display_title(Some(variant.name.as_str()), Some(product.name.as_str())).to_string();

    Ok(ProductCard {
        image_url: resolve_image_url(&variant.image_url, placeholder_image).to_string(),
        alt_text: title.clone(),
        title,
        description: product.description.clone(),
        price_display: format_cents_brl(i64::from(variant.price_in_cents)),
    })
}

/// Returns `candidate` unchanged when it parses as an absolute URL, otherwise
/// `placeholder`.
pub fn resolve_image_url<'a>(candidate: &'a str, placeholder: &'a str) -> &'a str {
    match Url::parse(candidate) {
        Ok(_) => candidate,
        Err(e) => {
            if !candidate.is_empty() {
                debug!(url = candidate, "Invalid image URL, using placeholder: {}", e);
            }
            placeholder
        }
    }
}

/// First non-empty name among variant and product, else [`FALLBACK_TITLE`].
pub fn display_title<'a>(variant_name: Option<&'a str>, product_name: Option<&'a str>) -> &'a str {
    [variant_name, product_name]
        .into_iter()
        .flatten()
        .find(|name| !name.is_empty())
        .unwrap_or(FALLBACK_TITLE)
}
