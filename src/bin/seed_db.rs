use cinemathisweek::{config::DbConfig, db::Db, init_tracing, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = DbConfig::from_env()?;
    let db = Db::connect(&config).await?;
    let report = seed::seed(&db).await?;

    tracing::info!(inserted = ?report.inserted, skipped = ?report.skipped, "seeding finished");
    Ok(())
}
