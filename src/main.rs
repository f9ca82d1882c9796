use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrine_admin::application::{
    ports::{storage::ImageStorage, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use vitrine_admin::config::AppConfig;
use vitrine_admin::domain::category::CategoryRepository;
use vitrine_admin::infrastructure::{
    database, repositories::PostgresCategoryRepository, storage::LocalImageStorage,
    time::SystemClock, util::DefaultSlugGenerator,
};
use vitrine_admin::presentation::http::{
    routes::{RouterOptions, build_router},
    state::{AdminToken, HttpState},
};

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

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    tokio::fs::create_dir_all(config.media_root()).await?;

    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool));
    let image_storage: Arc<dyn ImageStorage> = Arc::new(LocalImageStorage::new(
        config.media_root(),
        config.media_url(),
    ));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&category_repo),
        Arc::clone(&image_storage),
        Arc::clone(&clock),
        Arc::clone(&slugger),
    ));

    if config.admin_token().is_none() {
        tracing::warn!("ADMIN_TOKEN is not set; admin routes are unauthenticated");
    }

    let state = HttpState {
        services,
        admin_token: config.admin_token().map(AdminToken::new),
    };

    let app = build_router(
        state,
        RouterOptions {
            media_root: config.media_root().to_path_buf(),
            media_url: config.media_url().to_string(),
            max_upload_bytes: config.max_upload_bytes(),
            allowed_origins: config.allowed_origins().to_vec(),
        },
    );

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
            tracing::error!(error = %err, "failed to install CTRL+C handler");
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
                tracing::error!(error = %err, "failed to install terminate handler");
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
