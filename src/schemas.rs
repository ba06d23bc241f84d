use axum::{Json, http::StatusCode};
use common::ProductCard;
use display::ProductCardSelector;
use moka::future::Cache;
use sea_orm::{DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{OpenApi, ToSchema};

use crate::handlers::categories::CategoryResponse;
use crate::handlers::products::{PageQuery, ProductDetailResponse, VariantResponse};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Cache for rendered listings
    pub cache: Cache<String, CachedData>,
    /// Builds product cards with the configured placeholder image
    pub cards: ProductCardSelector,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Cards(Vec<ProductCard>),
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
            success: true,
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Build an error response with a machine-readable code
pub fn api_error(status: StatusCode, code: &str, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            code: code.to_string(),
            success: false,
        }),
    )
}

/// Log a database failure and hide its details from the client
pub fn database_error(context: &str, e: DbErr) -> ApiError {
    error!("{}: {}", context, e);
    api_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "DATABASE_ERROR",
        context.to_string(),
    )
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::categories::get_categories,
        crate::handlers::categories::get_category_products,
        crate::handlers::products::get_product_cards,
        crate::handlers::products::get_product,
        crate::handlers::products::get_product_card,
    ),
    components(
        schemas(
            ApiResponse<Vec<CategoryResponse>>,
            ApiResponse<Vec<ProductCard>>,
            ApiResponse<ProductCard>,
            ApiResponse<ProductDetailResponse>,
            ErrorResponse,
            HealthResponse,
            CategoryResponse,
            ProductCard,
            ProductDetailResponse,
            VariantResponse,
            PageQuery,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "categories", description = "Catalog categories"),
        (name = "products", description = "Products and product cards"),
    ),
    info(
        title = "Vitrine API",
        description = "Read-only storefront catalog API",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
