use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use super::run_migrations;
use crate::config::{build_app_state, connect_database};
use crate::router::create_router;

pub async fn serve(
    database_url: &str,
    bind_address: &str,
    placeholder_image: &str,
    migrate: bool,
) -> Result<()> {
    trace!("Entering serve function");
    info!("Vitrine application starting up");
    debug!("Database URL: {}", database_url);
    debug!("Bind address: {}", bind_address);
    debug!("Placeholder image: {}", placeholder_image);

    let db = match connect_database(database_url).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database '{}': {}", database_url, e);
            return Err(e);
        }
    };

    if migrate {
        run_migrations(&db).await?;
    }

    trace!("Initializing application state");
    let state = build_app_state(db, placeholder_image);

    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Vitrine API server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
