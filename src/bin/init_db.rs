use cinemathisweek::{config::DbConfig, db::Db, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = DbConfig::from_env()?;
    let db = Db::connect(&config).await?;
    db.init_schema().await?;

    tracing::info!(dbname = %config.dbname, "schema ready");
    Ok(())
}
