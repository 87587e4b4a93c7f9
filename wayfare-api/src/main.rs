use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wayfare_api::{app, AppState};
use wayfare_booking::BookingService;
use wayfare_catalog::PackageService;
use wayfare_store::{DbClient, PgBookingRepository, PgPackageRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wayfare_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = wayfare_store::app_config::Config::load().context("Failed to load config")?;
    tracing::info!("Starting Wayfare API on port {}", config.server.port);

    // The store connection is the one resource the process cannot run
    // without: failure here is fatal.
    let db = DbClient::new(&config.database.url)
        .await
        .context("Failed to connect to the document store")?;
    db.migrate().await.context("Failed to run migrations")?;

    let packages = PackageService::new(Arc::new(PgPackageRepository::new(db.pool.clone())));
    let bookings = BookingService::new(Arc::new(PgBookingRepository::new(db.pool.clone())));

    let state = AppState { packages, bookings };
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind listener")?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
