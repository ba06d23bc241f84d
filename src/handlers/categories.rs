use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use common::ProductCard;
use model::entities::category;
use model::load_with_variants;
use sea_orm::{EntityTrait, QueryOrder, prelude::Uuid};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;

use crate::schemas::{
    ApiError, ApiResponse, AppState, CachedData, ErrorResponse, api_error, database_error,
};

/// Response structure for category operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl From<category::Model> for CategoryResponse {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            created_at: model.created_at,
        }
    }
}

/// Get all categories
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "List of all categories", body = ApiResponse<Vec<CategoryResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "categories"
)]
#[instrument(skip(state))]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CategoryResponse>>>, ApiError> {
    debug!("Fetching all categories");

    let categories = category::Entity::find()
        .order_by_asc(category::Column::Name)
        .all(&state.db)
        .await
        .map_err(|e| database_error("Failed to fetch categories", e))?;

    info!("Retrieved {} categories", categories.len());
    Ok(Json(ApiResponse::ok(
        categories.into_iter().map(CategoryResponse::from).collect(),
        "Categories retrieved successfully",
    )))
}

/// Get the product cards of a category
#[utoipa::path(
    get,
    path = "/api/v1/categories/{slug}/products",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Product cards of the category", body = ApiResponse<Vec<ProductCard>>),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "categories"
)]
#[instrument(skip(state))]
pub async fn get_category_products(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ProductCard>>>, ApiError> {
    let cache_key = format!("category:{}", slug);
    if let Some(CachedData::Cards(cards)) = state.cache.get(&cache_key).await {
        debug!("Serving cards for category '{}' from cache", slug);
        return Ok(Json(ApiResponse::ok(cards, "Product cards retrieved successfully")));
    }

    let category = category::Entity::find_by_slug(&slug)
        .one(&state.db)
        .await
        .map_err(|e| database_error("Failed to fetch category", e))?
        .ok_or_else(|| {
            warn!("Category '{}' not found", slug);
            api_error(
                StatusCode::NOT_FOUND,
                "CATEGORY_NOT_FOUND",
                format!("Category '{}' not found", slug),
            )
        })?;

    let products = category
        .products(&state.db)
        .await
        .map_err(|e| database_error("Failed to fetch products", e))?;
    let items = load_with_variants(&state.db, products)
        .await
        .map_err(|e| database_error("Failed to fetch product variants", e))?;

    let cards = state.cards.select_many(&items);
    info!("Built {} cards for category '{}'", cards.len(), slug);

    state
        .cache
        .insert(cache_key, CachedData::Cards(cards.clone()))
        .await;

    Ok(Json(ApiResponse::ok(cards, "Product cards retrieved successfully")))
}
