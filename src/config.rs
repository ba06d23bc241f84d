use anyhow::Result;
use display::ProductCardSelector;
use moka::future::Cache;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend};
use std::time::Duration;
use tracing::{debug, info};

use crate::schemas::AppState;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://vitrine.db?mode=rwc";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// How long a rendered card listing stays cached.
const CARD_CACHE_TTL: Duration = Duration::from_secs(300);
const CARD_CACHE_CAPACITY: u64 = 1000;

/// Connect to the database, enforcing foreign keys on SQLite.
pub async fn connect_database(database_url: &str) -> Result<DatabaseConnection> {
    info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    if db.get_database_backend() == DbBackend::Sqlite {
        debug!("Enabling SQLite foreign key enforcement");
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;
    }

    Ok(db)
}

/// Wrap an open connection into the shared handler state
pub fn build_app_state(db: DatabaseConnection, placeholder_image: &str) -> AppState {
    let cache = Cache::builder()
        .max_capacity(CARD_CACHE_CAPACITY)
        .time_to_live(CARD_CACHE_TTL)
        .build();

    AppState {
        db,
        cache,
        cards: ProductCardSelector::new(placeholder_image),
    }
}
