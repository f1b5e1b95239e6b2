use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bucket_gateway::{config, create_router, drivers, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bucket_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        "bucket-gateway {} (built {})",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_TIME")
    );

    // Load configuration / 加载配置
    let app_config = config::load_config()?;

    // Storage client is built once and shared by every request; failure aborts startup / 创建存储客户端
    let store = drivers::create_store(&app_config.storage)?;
    tracing::info!(
        "Bucket {} at {} ({} driver)",
        app_config.storage.bucket,
        app_config.storage.endpoint_url(),
        store.name()
    );

    let state = Arc::new(AppState::new(store, &app_config));
    let app = create_router(state);

    let bind_addr = app_config.get_bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server running at http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
