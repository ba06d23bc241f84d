#[cfg(test)]
pub mod test_utils {
    use crate::cli::commands::seed::{parse_catalog, seed_catalog};
    use crate::config::build_app_state;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use display::DEFAULT_PLACEHOLDER_IMAGE;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Catalog every HTTP test starts from.
    pub const TEST_CATALOG: &str = include_str!("../data/catalog.yaml");

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        db.execute_unprepared("PRAGMA foreign_keys = ON;")
            .await
            .expect("Failed to enable foreign keys");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Create AppState over a seeded catalog with the given placeholder image
    pub async fn setup_test_app_state_with_placeholder(placeholder_image: &str) -> AppState {
        let db = setup_test_db().await;

        let catalog = parse_catalog(TEST_CATALOG, "yaml").expect("Test catalog should parse");
        seed_catalog(&db, &catalog)
            .await
            .expect("Failed to seed test catalog");

        build_app_state(db, placeholder_image)
    }

    /// Create AppState for testing
    pub async fn setup_test_app_state() -> AppState {
        setup_test_app_state_with_placeholder(DEFAULT_PLACEHOLDER_IMAGE).await
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr) // Output to stderr, which is captured by tests
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> Router {
        let _guard = init_test_tracing();

        let state = setup_test_app_state().await;
        create_router(state)
    }

    /// Create axum app whose cards use `placeholder_image`
    pub async fn setup_test_app_with_placeholder(placeholder_image: &str) -> Router {
        let _guard = init_test_tracing();

        let state = setup_test_app_state_with_placeholder(placeholder_image).await;
        create_router(state)
    }
}
