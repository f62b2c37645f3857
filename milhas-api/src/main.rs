use std::net::SocketAddr;
use std::sync::Arc;
use milhas_api::{app, AppState};
use milhas_store::{app_config::Config, DbClient, StoreGoalRepository, StorePromotionRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "milhas_api=debug,milhas_matcher=info,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting Milhas API on port {}", config.server.port);

    let db = DbClient::new(&config.database).await?;
    if config.database.run_migrations {
        db.migrate().await?;
    }

    let app_state = AppState {
        promotion_repo: Arc::new(StorePromotionRepository::new(db.pool.clone())),
        goal_repo: Arc::new(StoreGoalRepository::new(db.pool.clone())),
        matcher: config.matcher.clone(),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
