//! Backend entry-point: loads settings, prepares storage and serves the API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bijou_backend::inbound::http::health::HealthState;
use bijou_backend::inbound::http::state::MediaUrls;
use bijou_backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use bijou_backend::settings::Settings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = Settings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr()?;
    let mut config = ServerConfig::new(bind_addr, MediaUrls::new(settings.media_base_url()));
    let mut health = HealthState::new();

    if let Some(url) = settings.database_url() {
        if settings.run_migrations() {
            let owned = url.to_owned();
            let applied = web::block(move || run_migrations(&owned))
                .await
                .map_err(|err| eyre!("migration task failed: {err}"))?
                .wrap_err("failed to apply database migrations")?;
            info!(applied, "database migrations complete");
        }

        let pool_config = PoolConfig::new(url)
            .with_max_size(settings.db_max_connections())
            .with_min_idle(Some(settings.db_min_idle()))
            .with_connection_timeout(settings.db_connect_timeout());
        let pool = DbPool::new(pool_config)
            .await
            .wrap_err("failed to build database pool")?;
        health = health.with_pool(pool.clone());
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(health);
    info!(%bind_addr, "starting server");
    let server = create_server(health_state, config)?;
    server.await?;
    Ok(())
}
