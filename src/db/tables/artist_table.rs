//! Artist table operations

use sqlx::FromRow;
use tracing::debug;

use crate::db::DbEngine;
use crate::errors::CatalogResult;
use crate::models::Artist;

const ARTIST_COLUMNS: &str = "id, name, slug, bio, image, created_at";

/// Database row for artist table
#[derive(Debug, FromRow)]
struct ArtistRow {
    id: i64,
    name: String,
    slug: String,
    bio: Option<String>,
    image: Option<String>,
    created_at: i64,
}

impl ArtistRow {
    fn into_artist(self) -> Artist {
        Artist {
            id: self.id,
            name: self.name,
            slug: self.slug,
            bio: self.bio,
            image: self.image,
            created_at: self.created_at,
        }
    }
}

/// Artist table operations
pub struct ArtistTable;

impl ArtistTable {
    /// Get an artist by exact slug
    pub async fn find_by_slug(engine: &DbEngine, slug: &str) -> CatalogResult<Option<Artist>> {
        let query = format!("SELECT {} FROM artist WHERE slug = ?", ARTIST_COLUMNS);
        let row: Option<ArtistRow> = sqlx::query_as(&query)
            .bind(slug)
            .fetch_optional(engine.pool())
            .await?;

        Ok(row.map(ArtistRow::into_artist))
    }

    /// Get an artist by ID
    pub async fn find_by_id(engine: &DbEngine, id: i64) -> CatalogResult<Option<Artist>> {
        let query = format!("SELECT {} FROM artist WHERE id = ?", ARTIST_COLUMNS);
        let row: Option<ArtistRow> = sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(engine.pool())
            .await?;

        Ok(row.map(ArtistRow::into_artist))
    }

    /// Get all artists ordered by name
    pub async fn all_by_name(engine: &DbEngine) -> CatalogResult<Vec<Artist>> {
        let query = format!("SELECT {} FROM artist ORDER BY name, id", ARTIST_COLUMNS);
        let rows: Vec<ArtistRow> = sqlx::query_as(&query).fetch_all(engine.pool()).await?;

        Ok(rows.into_iter().map(ArtistRow::into_artist).collect())
    }

    /// Case-sensitive substring search on the artist name
    pub async fn search_by_name(
        engine: &DbEngine,
        needle: &str,
        limit: usize,
    ) -> CatalogResult<Vec<Artist>> {
        debug!("Searching artists for {:?}", needle);

        let query = format!(
            "SELECT {} FROM artist WHERE instr(name, ?) > 0 ORDER BY id LIMIT ?",
            ARTIST_COLUMNS
        );
        let rows: Vec<ArtistRow> = sqlx::query_as(&query)
            .bind(needle)
            .bind(limit as i64)
            .fetch_all(engine.pool())
            .await?;

        Ok(rows.into_iter().map(ArtistRow::into_artist).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::seeded_engine;

    #[tokio::test]
    async fn test_find_by_slug_is_exact() {
        let engine = seeded_engine().await;

        let artist = ArtistTable::find_by_slug(&engine, "aster").await.unwrap();
        assert_eq!(artist.map(|a| a.name), Some("Aster".to_string()));

        for near_miss in ["Aster", "aster "] {
            let artist = ArtistTable::find_by_slug(&engine, near_miss).await;
            assert!(artist.unwrap().is_none());
        }
    }

    #[tokio::test]
    async fn test_search_by_name_is_case_sensitive() {
        let engine = seeded_engine().await;

        let hits = ArtistTable::search_by_name(&engine, "Cob", 10).await;
        assert_eq!(hits.unwrap().len(), 1);

        let hits = ArtistTable::search_by_name(&engine, "cob", 10).await;
        assert!(hits.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_all_by_name() {
        let engine = seeded_engine().await;
        let names: Vec<String> = ArtistTable::all_by_name(&engine)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();

        assert_eq!(names, vec!["Aster", "Bellwether", "Cobalt"]);
    }
}
