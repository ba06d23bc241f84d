//! Transport-layer types and formatting shared by the display layer and the
//! HTTP API. Nothing here touches the database.

mod card;
pub mod money;

pub use card::ProductCard;
pub use money::format_cents_brl;
