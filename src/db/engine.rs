//! Database engine and connection management

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Connection settings for the catalog store
#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub database_path: PathBuf,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// Create the catalog tables when missing. The schema is normally owned
    /// by the ingestion side; this exists for development databases.
    pub create_schema: bool,
}

/// Database engine wrapper
///
/// Constructed once by the process entry point and handed to every catalog
/// operation. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct DbEngine {
    pool: SqlitePool,
}

impl DbEngine {
    /// Open the SQLite catalog described by `options`
    pub async fn connect(options: &StoreOptions) -> Result<DbEngine> {
        let db_path = &options.database_path;

        // the journal mode belongs to the ingestion side; leave it untouched
        let connect_options =
            SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path.display()))?
                .create_if_missing(options.create_schema)
                .read_only(!options.create_schema)
                .busy_timeout(options.acquire_timeout)
                .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(options.max_connections.max(1))
            .min_connections(1)
            .acquire_timeout(options.acquire_timeout)
            .connect_with(connect_options)
            .await
            .with_context(|| format!("Failed to open catalog at {}", db_path.display()))?;

        info!("Connected to catalog at {}", db_path.display());

        let engine = DbEngine { pool };
        if options.create_schema {
            engine.create_tables().await?;
        }

        Ok(engine)
    }

    /// Wrap an existing pool
    #[cfg(test)]
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every connection; later queries fail with a store error
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Create the catalog tables when missing
    pub async fn create_tables(&self) -> Result<()> {
        let pool = self.pool();

        debug!("Ensuring catalog schema");

        // Artist table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS artist (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                slug TEXT NOT NULL UNIQUE,
                bio TEXT,
                image TEXT,
                created_at INTEGER NOT NULL DEFAULT (strftime('%s','now'))
            );
            CREATE INDEX IF NOT EXISTS idx_artist_name ON artist(name);
            "#,
        )
        .execute(pool)
        .await
        .context("Failed to create artist table")?;

        // Album table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS album (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                slug TEXT NOT NULL UNIQUE,
                year INTEGER,
                album_art TEXT,
                artist_id INTEGER NOT NULL,
                created_at INTEGER NOT NULL DEFAULT (strftime('%s','now')),
                FOREIGN KEY (artist_id) REFERENCES artist(id)
            );
            CREATE INDEX IF NOT EXISTS idx_album_artist_id ON album(artist_id);
            CREATE INDEX IF NOT EXISTS idx_album_created_at ON album(created_at);
            "#,
        )
        .execute(pool)
        .await
        .context("Failed to create album table")?;

        // Song table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS song (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                slug TEXT NOT NULL UNIQUE,
                lyrics TEXT NOT NULL DEFAULT '',
                cover_art TEXT,
                artist_id INTEGER NOT NULL,
                album_id INTEGER,
                track_number INTEGER,
                created_at INTEGER NOT NULL DEFAULT (strftime('%s','now')),
                FOREIGN KEY (artist_id) REFERENCES artist(id),
                FOREIGN KEY (album_id) REFERENCES album(id)
            );
            CREATE INDEX IF NOT EXISTS idx_song_artist_id ON song(artist_id);
            CREATE INDEX IF NOT EXISTS idx_song_album_id ON song(album_id);
            CREATE INDEX IF NOT EXISTS idx_song_created_at ON song(created_at);
            "#,
        )
        .execute(pool)
        .await
        .context("Failed to create song table")?;

        Ok(())
    }
}
