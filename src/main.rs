use anyhow::Result;
use bazaar_core::application::{
    ports::{cache::CacheInvalidator, time::Clock, util::SlugGenerator},
    services::{ApplicationServices, CatalogRepositories},
};
use bazaar_core::config::AppConfig;
use bazaar_core::infrastructure::{
    cache::TracingCacheInvalidator,
    database,
    repositories::{
        PostgresProductReadRepository, PostgresProductWriteRepository,
        PostgresVendorReadRepository, PostgresVendorWriteRepository,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use bazaar_core::presentation::http::{routes::build_router_with_origins, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let repos = CatalogRepositories {
        vendor_write: Arc::new(PostgresVendorWriteRepository::new(pool.clone())),
        vendor_read: Arc::new(PostgresVendorReadRepository::new(pool.clone())),
        product_write: Arc::new(PostgresProductWriteRepository::new(pool.clone())),
        product_read: Arc::new(PostgresProductReadRepository::new(pool)),
    };
    let cache: Arc<dyn CacheInvalidator> = Arc::new(TracingCacheInvalidator);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        repos,
        cache,
        clock,
        slugger,
        config.default_vendor_slug().clone(),
    ));

    let state = HttpState { services };
    let app = build_router_with_origins(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
