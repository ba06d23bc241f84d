use crate::handlers::{
    categories::{get_categories, get_category_products},
    health::health_check,
    products::{get_product, get_product_card, get_product_cards},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{Router, routing::get};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Category routes
        .route("/api/v1/categories", get(get_categories))
        .route("/api/v1/categories/:slug/products", get(get_category_products))
        // Product routes
        .route("/api/v1/products", get(get_product_cards))
        .route("/api/v1/products/:slug", get(get_product))
        .route("/api/v1/products/:slug/card", get(get_product_card))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
