use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use chrono::{DateTime, Utc};
use common::{ProductCard, format_cents_brl};
use display::{DisplayError, resolve_image_url};
use model::entities::{product, product_variant};
use model::{ProductWithVariants, load_with_variants};
use sea_orm::{EntityTrait, PaginatorTrait, prelude::Uuid};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace, warn};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::schemas::{
    ApiError, ApiResponse, AppState, CachedData, ErrorResponse, api_error, database_error,
};

const DEFAULT_PAGE_SIZE: u64 = 20;

/// Query parameters for the paginated card listing
#[derive(Debug, Deserialize, ToSchema, IntoParams, Validate)]
pub struct PageQuery {
    /// Page number (default: 1)
    #[validate(range(min = 1, max = 10000))]
    pub page: Option<u64>,
    /// Page size (default: 20)
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u64>,
}

/// One purchasable variant of a product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VariantResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub color: String,
    pub price_in_cents: i32,
    /// Price formatted as Brazilian Real
    pub price_display: String,
    /// Variant image, or the placeholder when the stored URL is unusable
    pub image_url: String,
}

impl VariantResponse {
    fn new(model: product_variant::Model, placeholder_image: &str) -> Self {
        let image_url = resolve_image_url(&model.image_url, placeholder_image).to_string();
        Self {
            id: model.id,
            price_display: format_cents_brl(i64::from(model.price_in_cents)),
            name: model.name,
            slug: model.slug,
            color: model.color,
            price_in_cents: model.price_in_cents,
            image_url,
        }
    }
}

/// Product with all of its variants in display order
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductDetailResponse {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub variants: Vec<VariantResponse>,
}

impl ProductDetailResponse {
    fn new(item: ProductWithVariants, placeholder_image: &str) -> Self {
        let ProductWithVariants { product, variants } = item;
        Self {
            id: product.id,
            category_id: product.category_id,
            name: product.name,
            slug: product.slug,
            description: product.description,
            created_at: product.created_at,
            variants: variants
                .into_iter()
                .map(|v| VariantResponse::new(v, placeholder_image))
                .collect(),
        }
    }
}

/// Get product cards, one page at a time
#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "products",
    params(PageQuery),
    responses(
        (status = 200, description = "Product cards retrieved successfully", body = ApiResponse<Vec<ProductCard>>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_product_cards(
    Valid(Query(query)): Valid<Query<PageQuery>>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ProductCard>>>, ApiError> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    debug!("Fetching product cards - page: {}, limit: {}", page, limit);

    let cache_key = format!("products:{}:{}", page, limit);
    if let Some(CachedData::Cards(cards)) = state.cache.get(&cache_key).await {
        trace!("Cache hit for {}", cache_key);
        return Ok(Json(ApiResponse::ok(cards, "Product cards retrieved successfully")));
    }

    let products = product::Entity::find_in_catalog_order()
        .paginate(&state.db, limit)
        .fetch_page(page - 1)
        .await
        .map_err(|e| database_error("Failed to fetch products", e))?;
    let items = load_with_variants(&state.db, products)
        .await
        .map_err(|e| database_error("Failed to fetch product variants", e))?;

    let cards = state.cards.select_many(&items);
    info!("Retrieved {} product cards", cards.len());

    state
        .cache
        .insert(cache_key, CachedData::Cards(cards.clone()))
        .await;

    Ok(Json(ApiResponse::ok(cards, "Product cards retrieved successfully")))
}

/// Get a product with all of its variants
#[utoipa::path(
    get,
    path = "/api/v1/products/{slug}",
    tag = "products",
    params(
        ("slug" = String, Path, description = "Product slug")
    ),
    responses(
        (status = 200, description = "Product retrieved successfully", body = ApiResponse<ProductDetailResponse>),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_product(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ProductDetailResponse>>, ApiError> {
    let item = find_product_with_variants(&state, &slug).await?;
    debug!("Product '{}' has {} variants", slug, item.variants.len());

    Ok(Json(ApiResponse::ok(
        ProductDetailResponse::new(item, state.cards.placeholder_image()),
        "Product retrieved successfully",
    )))
}

/// Get the display card of a single product
#[utoipa::path(
    get,
    path = "/api/v1/products/{slug}/card",
    tag = "products",
    params(
        ("slug" = String, Path, description = "Product slug")
    ),
    responses(
        (status = 200, description = "Product card built successfully", body = ApiResponse<ProductCard>),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 422, description = "Product has no variants", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_product_card(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ProductCard>>, ApiError> {
    let item = find_product_with_variants(&state, &slug).await?;

    let card = state.cards.select(&item).map_err(|e| match e {
        DisplayError::MissingVariant { .. } => {
            warn!("Product '{}' has no variants: {}", slug, e);
            api_error(StatusCode::UNPROCESSABLE_ENTITY, "MISSING_VARIANT", e.to_string())
        }
    })?;

    Ok(Json(ApiResponse::ok(card, "Product card built successfully")))
}

async fn find_product_with_variants(
    state: &AppState,
    slug: &str,
) -> Result<ProductWithVariants, ApiError> {
    let product = product::Entity::find_by_slug(slug)
        .one(&state.db)
        .await
        .map_err(|e| database_error("Failed to fetch product", e))?
        .ok_or_else(|| {
            warn!("Product '{}' not found", slug);
            api_error(
                StatusCode::NOT_FOUND,
                "PRODUCT_NOT_FOUND",
                format!("Product '{}' not found", slug),
            )
        })?;

    let variants = product
        .variants(&state.db)
        .await
        .map_err(|e| database_error("Failed to fetch product variants", e))?;

    Ok(ProductWithVariants { product, variants })
}
