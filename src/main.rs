use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &gsu_monitor::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        bind_addr = %cfg.bind_addr,
        database_url = %cfg.database_url,
        loglevel = %cfg.loglevel,
    );

    // Not served by any route yet; created so uploads have a place to land
    // once that work happens.
    std::fs::create_dir_all(&cfg.upload_dir)?;

    let storage = gsu_monitor::db::spawn(&cfg.database_url).await?;
    storage.init_schema().await?;
    storage.seed_demo_data().await?;

    let state = gsu_monitor::router::MonitorState::new(storage, cfg.cookie_key());
    let app = gsu_monitor::router::monitor_router(state);

    let listener = TcpListener::bind(&cfg.bind_addr).await?;
    info!("HTTP server listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
