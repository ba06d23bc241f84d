pub mod entities;
pub mod error;

pub use entities::product::{ProductWithVariants, load_with_variants};
pub use error::CatalogError;
