use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{config::DbConfig, error::AppResult};

const MAX_CONNECTIONS: u32 = 5;

// sqlx busy-loops its reaper on a zero lifetime, so use the smallest
// non-zero one.
const CONNECTION_LIFETIME: Duration = Duration::from_millis(1);

fn connect_options(config: &DbConfig) -> ConnectOptions {
    let mut opts = ConnectOptions::new(config.connection_url());
    opts.max_connections(MAX_CONNECTIONS)
        .min_connections(0)
        .max_lifetime(CONNECTION_LIFETIME)
        .idle_timeout(CONNECTION_LIFETIME)
        .connect_lazy(true)
        .sqlx_logging(false);
    opts
}

/// Session factory for the game database.
///
/// Built once at startup and handed to whoever needs a session. The
/// deployment sits behind an external connection pooler, so connections are
/// not reused locally: one released by a session is past its lifetime by the
/// next acquire and gets closed instead of handed out again. The first
/// connection is only opened when a session is requested.
#[derive(Clone, Debug)]
pub struct Db {
    conn: DatabaseConnection,
}

impl Db {
    pub async fn connect(config: &DbConfig) -> AppResult<Self> {
        let conn = Database::connect(connect_options(config)).await?;
        tracing::debug!(host = %config.host, dbname = %config.dbname, "database configured");
        Ok(Self { conn })
    }

    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Opens a transaction. Nothing is persisted until `commit()`; dropping
    /// the session without committing rolls it back.
    pub async fn session(&self) -> AppResult<DatabaseTransaction> {
        Ok(self.conn.begin().await?)
    }

    /// Creates any missing tables. Safe to run against an initialized
    /// database.
    pub async fn init_schema(&self) -> AppResult<()> {
        Migrator::up(&self.conn, None).await?;
        Ok(())
    }
}
