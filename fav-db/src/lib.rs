pub mod error;

use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

pub mod builders;

pub use builders::favorites::FavoriteItem;

#[derive(Debug)]
pub struct Handle {
    pub pool: SqlitePool,
}
/// Database client for the favorites store
///
/// One table, keyed by the player's PUUID.
pub struct Client {
    handle: Arc<Handle>,
}

impl Client {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // every pooled connection to `:memory:` would open its own empty database
        let in_memory = database_url.contains(":memory:");
        let mut pool = SqlitePoolOptions::new()
            .max_connections(if in_memory { 1 } else { max_connections })
            .acquire_timeout(Duration::from_secs(10));
        if in_memory {
            pool = pool.idle_timeout(None).max_lifetime(None);
        }
        let pool = pool.connect_with(options).await?;
        tracing::info!("connected to favorites db");

        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        create_schema(&pool).await?;
        Ok(Self {
            handle: Arc::new(Handle { pool }),
        })
    }

    pub fn favorites(&self) -> builders::favorites::FavoritesClient {
        builders::favorites::FavoritesClient::new(self.handle.clone())
    }

    /// Cheap round trip used by health checks
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.handle.pool).await?;
        Ok(())
    }
}

impl Clone for Client {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
        }
    }
}

async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS favorites (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            puuid TEXT NOT NULL UNIQUE,
            game_name TEXT NOT NULL,
            tag_line TEXT NOT NULL,
            summoner_name TEXT NOT NULL DEFAULT '',
            profile_icon_id INTEGER NOT NULL DEFAULT 0,
            profile_icon_url TEXT NOT NULL,
            summoner_level INTEGER NOT NULL DEFAULT 1,
            tier TEXT NOT NULL DEFAULT 'UNRANKED',
            "rank" TEXT NOT NULL DEFAULT '',
            league_points INTEGER NOT NULL DEFAULT 0,
            wins INTEGER NOT NULL DEFAULT 0,
            losses INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

#[cfg(test)]
pub(crate) async fn test_client() -> Client {
    Client::connect("sqlite::memory:", 1)
        .await
        .expect("in-memory sqlite")
}
