//! Album table operations

use sqlx::FromRow;
use tracing::debug;

use crate::db::DbEngine;
use crate::errors::{CatalogError, CatalogResult};
use crate::models::{Album, AlbumCard, ArtistRef};

const ALBUM_COLUMNS: &str = "id, title, slug, year, album_art, artist_id, created_at";

/// Database row for album table
#[derive(Debug, FromRow)]
struct AlbumRow {
    id: i64,
    title: String,
    slug: String,
    year: Option<i32>,
    album_art: Option<String>,
    artist_id: i64,
    created_at: i64,
}

impl AlbumRow {
    fn into_album(self) -> Album {
        Album {
            id: self.id,
            title: self.title,
            slug: self.slug,
            year: self.year,
            album_art: self.album_art,
            artist_id: self.artist_id,
            created_at: self.created_at,
        }
    }
}

/// Album joined with its artist's name and slug
#[derive(Debug, FromRow)]
struct AlbumCardRow {
    id: i64,
    title: String,
    slug: String,
    year: Option<i32>,
    album_art: Option<String>,
    artist_id: i64,
    artist_name: Option<String>,
    artist_slug: Option<String>,
}

impl AlbumCardRow {
    fn into_card(self) -> CatalogResult<AlbumCard> {
        let artist = match (self.artist_name, self.artist_slug) {
            (Some(name), Some(slug)) => ArtistRef { name, slug },
            _ => return Err(CatalogError::broken_relation("artist", self.artist_id)),
        };

        Ok(AlbumCard {
            id: self.id,
            title: self.title,
            slug: self.slug,
            year: self.year,
            album_art: self.album_art,
            artist,
        })
    }
}

const ALBUM_CARD_SELECT: &str = r#"
    SELECT al.id, al.title, al.slug, al.year, al.album_art, al.artist_id,
           ar.name AS artist_name, ar.slug AS artist_slug
    FROM album al
    LEFT JOIN artist ar ON ar.id = al.artist_id
"#;

/// Album table operations
pub struct AlbumTable;

impl AlbumTable {
    /// Get an album by exact slug
    pub async fn find_by_slug(engine: &DbEngine, slug: &str) -> CatalogResult<Option<Album>> {
        let query = format!("SELECT {} FROM album WHERE slug = ?", ALBUM_COLUMNS);
        let row: Option<AlbumRow> = sqlx::query_as(&query)
            .bind(slug)
            .fetch_optional(engine.pool())
            .await?;

        Ok(row.map(AlbumRow::into_album))
    }

    /// Get an album by ID
    pub async fn find_by_id(engine: &DbEngine, id: i64) -> CatalogResult<Option<Album>> {
        let query = format!("SELECT {} FROM album WHERE id = ?", ALBUM_COLUMNS);
        let row: Option<AlbumRow> = sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(engine.pool())
            .await?;

        Ok(row.map(AlbumRow::into_album))
    }

    /// Get an artist's albums, oldest first with undated albums last
    pub async fn by_artist(engine: &DbEngine, artist_id: i64) -> CatalogResult<Vec<Album>> {
        let query = format!(
            "SELECT {} FROM album WHERE artist_id = ? ORDER BY year IS NULL, year, title, id",
            ALBUM_COLUMNS
        );
        let rows: Vec<AlbumRow> = sqlx::query_as(&query)
            .bind(artist_id)
            .fetch_all(engine.pool())
            .await?;

        Ok(rows.into_iter().map(AlbumRow::into_album).collect())
    }

    /// Case-sensitive substring search on the album title
    pub async fn search_by_title(
        engine: &DbEngine,
        needle: &str,
        limit: usize,
    ) -> CatalogResult<Vec<AlbumCard>> {
        debug!("Searching albums for {:?}", needle);

        let query = format!(
            "{} WHERE instr(al.title, ?) > 0 ORDER BY al.id LIMIT ?",
            ALBUM_CARD_SELECT
        );
        let rows: Vec<AlbumCardRow> = sqlx::query_as(&query)
            .bind(needle)
            .bind(limit as i64)
            .fetch_all(engine.pool())
            .await?;

        rows.into_iter().map(AlbumCardRow::into_card).collect()
    }

    /// Get the most recently added albums
    pub async fn recent(engine: &DbEngine, limit: usize) -> CatalogResult<Vec<AlbumCard>> {
        let query = format!(
            "{} ORDER BY al.created_at DESC, al.id DESC LIMIT ?",
            ALBUM_CARD_SELECT
        );
        let rows: Vec<AlbumCardRow> = sqlx::query_as(&query)
            .bind(limit as i64)
            .fetch_all(engine.pool())
            .await?;

        rows.into_iter().map(AlbumCardRow::into_card).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::seeded_engine;

    #[tokio::test]
    async fn test_by_artist_orders_by_year_with_undated_last() {
        let engine = seeded_engine().await;
        let bellwether = crate::db::ArtistTable::find_by_slug(&engine, "bellwether")
            .await
            .unwrap()
            .unwrap();

        let titles: Vec<String> = AlbumTable::by_artist(&engine, bellwether.id)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();

        assert_eq!(titles, vec!["Second Wind", "Early Days"]);
    }

    #[tokio::test]
    async fn test_search_by_title_loads_artist() {
        let engine = seeded_engine().await;
        let hits = AlbumTable::search_by_title(&engine, "Roots", 10)
            .await
            .unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].artist.slug, "aster");
        assert_eq!(hits[0].year, Some(2020));
    }

    #[tokio::test]
    async fn test_recent_is_newest_first() {
        let engine = seeded_engine().await;
        let recent = AlbumTable::recent(&engine, 2).await.unwrap();

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].slug, "second-wind");
    }
}
