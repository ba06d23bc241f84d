#[cfg(test)]
mod integration_tests {
    use crate::handlers::categories::CategoryResponse;
    use crate::handlers::products::ProductDetailResponse;
    use crate::router::create_router;
    use crate::schemas::{ApiResponse, ErrorResponse, HealthResponse, database_error};
    use crate::test_utils::test_utils::{
        setup_test_app, setup_test_app_state, setup_test_app_with_placeholder,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::ProductCard;
    use model::entities::product;
    use sea_orm::{DbErr, EntityTrait};

    async fn server() -> TestServer {
        TestServer::new(setup_test_app().await).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = server().await;

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.database, "connected");
    }

    #[tokio::test]
    async fn test_get_categories_sorted_by_name() {
        let server = server().await;

        let response = server.get("/api/v1/categories").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<CategoryResponse>> = response.json();
        assert!(body.success);
        let slugs: Vec<&str> = body.data.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["acessorios", "calcas", "camisetas"]);
    }

    #[tokio::test]
    async fn test_category_cards_use_first_variant() {
        let server = server().await;

        let response = server.get("/api/v1/categories/camisetas/products").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<ProductCard>> = response.json();
        assert_eq!(
            body.data,
            vec![ProductCard {
                image_url: "https://cdn.vitrine.example/camiseta-basica-branca.png".to_string(),
                alt_text: "Camiseta Básica Branca".to_string(),
                title: "Camiseta Básica Branca".to_string(),
                description: "Camiseta 100% algodão com gola careca.".to_string(),
                price_display: "R$ 79,90".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_category_cards_fall_back_and_skip_products_without_variants() {
        let server = server().await;

        let response = server.get("/api/v1/categories/acessorios/products").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<ProductCard>> = response.json();
        // The sock kit has no variants and is left out.
        assert_eq!(body.data.len(), 1);
        let card = &body.data[0];
        assert_eq!(card.title, "Boné Aba Curva");
        assert_eq!(card.alt_text, "Boné Aba Curva");
        assert_eq!(card.image_url, "/placeholder.png");
        assert_eq!(card.price_display, "R$ 49,90");
    }

    #[tokio::test]
    async fn test_unknown_category_returns_not_found() {
        let server = server().await;

        let response = server.get("/api/v1/categories/sapatos/products").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert!(!body.success);
        assert_eq!(body.code, "CATEGORY_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_product_cards_in_catalog_order() {
        let server = server().await;

        let response = server.get("/api/v1/products").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<ProductCard>> = response.json();
        let titles: Vec<&str> = body.data.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Camiseta Básica Branca", "Calça Jeans Reta Azul", "Boné Aba Curva"]
        );
        assert_eq!(body.data[1].price_display, "R$ 1.599,90");
        assert_eq!(body.data[1].image_url, "/placeholder.png");
    }

    #[tokio::test]
    async fn test_product_cards_pagination() {
        let server = server().await;

        let first: ApiResponse<Vec<ProductCard>> = server
            .get("/api/v1/products")
            .add_query_param("page", 1)
            .add_query_param("limit", 2)
            .await
            .json();
        assert_eq!(first.data.len(), 2);

        // Second page holds the cap and the sock kit, which has no card.
        let second: ApiResponse<Vec<ProductCard>> = server
            .get("/api/v1/products")
            .add_query_param("page", 2)
            .add_query_param("limit", 2)
            .await
            .json();
        assert_eq!(second.data.len(), 1);
        assert_eq!(second.data[0].title, "Boné Aba Curva");

        let past_end: ApiResponse<Vec<ProductCard>> = server
            .get("/api/v1/products")
            .add_query_param("page", 3)
            .add_query_param("limit", 2)
            .await
            .json();
        assert!(past_end.data.is_empty());
    }

    #[tokio::test]
    async fn test_product_cards_reject_invalid_pagination() {
        let server = server().await;

        for (page, limit) in [(0, 10), (1, 0), (1, 101), (10001, 10)] {
            let response = server
                .get("/api/v1/products")
                .add_query_param("page", page)
                .add_query_param("limit", limit)
                .await;
            response.assert_status(StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_get_product_detail() {
        let server = server().await;

        let response = server.get("/api/v1/products/camiseta-basica").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ProductDetailResponse> = response.json();
        let product = body.data;
        assert_eq!(product.name, "Camiseta Básica");
        assert_eq!(product.variants.len(), 2);
        assert_eq!(product.variants[0].slug, "camiseta-basica-branca");
        assert_eq!(product.variants[1].slug, "camiseta-basica-preta");
        assert_eq!(product.variants[1].price_in_cents, 8490);
        assert_eq!(product.variants[1].price_display, "R$ 84,90");
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let server = server().await;

        for path in ["/api/v1/products/sapato", "/api/v1/products/sapato/card"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::NOT_FOUND);
            let body: ErrorResponse = response.json();
            assert_eq!(body.code, "PRODUCT_NOT_FOUND");
        }
    }

    #[tokio::test]
    async fn test_get_product_card() {
        let server = server().await;

        let response = server.get("/api/v1/products/calca-jeans-reta/card").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ProductCard> = response.json();
        assert_eq!(body.data.title, "Calça Jeans Reta Azul");
        assert_eq!(body.data.image_url, "/placeholder.png");
        assert_eq!(body.data.price_display, "R$ 1.599,90");
    }

    #[tokio::test]
    async fn test_product_card_without_variants_is_unprocessable() {
        let server = server().await;

        let response = server.get("/api/v1/products/kit-de-meias/card").await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "MISSING_VARIANT");

        // The product itself is still listed, just without variants.
        let detail: ApiResponse<ProductDetailResponse> =
            server.get("/api/v1/products/kit-de-meias").await.json();
        assert!(detail.data.variants.is_empty());
    }

    #[tokio::test]
    async fn test_configured_placeholder_image() {
        let app = setup_test_app_with_placeholder("/static/sem-foto.webp").await;
        let server = TestServer::new(app).unwrap();

        let card: ApiResponse<ProductCard> = server
            .get("/api/v1/products/calca-jeans-reta/card")
            .await
            .json();
        assert_eq!(card.data.image_url, "/static/sem-foto.webp");

        let detail: ApiResponse<ProductDetailResponse> =
            server.get("/api/v1/products/calca-jeans-reta").await.json();
        assert_eq!(detail.data.variants[0].image_url, "/static/sem-foto.webp");
    }

    #[tokio::test]
    async fn test_card_listing_is_cached() {
        let state = setup_test_app_state().await;
        let db = state.db.clone();
        let server = TestServer::new(create_router(state)).unwrap();

        let before: ApiResponse<Vec<ProductCard>> =
            server.get("/api/v1/categories/camisetas/products").await.json();
        assert_eq!(before.data.len(), 1);

        // Products cascade to their variants, so the listing would now be empty.
        product::Entity::delete_many().exec(&db).await.unwrap();

        let cached: ApiResponse<Vec<ProductCard>> =
            server.get("/api/v1/categories/camisetas/products").await.json();
        assert_eq!(cached.data, before.data);

        let uncached: ApiResponse<Vec<ProductCard>> = server.get("/api/v1/products").await.json();
        assert!(uncached.data.is_empty());
    }

    #[test]
    fn test_database_errors_hide_details() {
        let (status, body) = database_error(
            "Failed to fetch products",
            DbErr::Custom("FOREIGN KEY constraint failed".to_string()),
        );

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "DATABASE_ERROR");
        assert_eq!(body.error, "Failed to fetch products");
        assert!(!body.success);
    }
}
