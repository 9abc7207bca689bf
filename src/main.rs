use std::sync::Arc;

use cinemathisweek::{AppState, config::Config, create_app, db::Db, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Arc::new(Config::from_env()?);
    let db = Db::connect(&config.db).await?;

    let state = Arc::new(AppState { config: config.clone(), db });
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
