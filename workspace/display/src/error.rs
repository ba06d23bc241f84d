use thiserror::Error;

/// Error types for building display records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    /// The product has no variant to take a price and picture from.
    #[error("Product {product_id} has no variants")]
    MissingVariant { product_id: String },
}

/// Type alias for Result with DisplayError
pub type Result<T> = std::result::Result<T, DisplayError>;
