//! Song table operations

use sqlx::FromRow;
use tracing::debug;

use crate::db::DbEngine;
use crate::errors::{CatalogError, CatalogResult};
use crate::models::{AlbumRef, ArtistRef, Song, SongCard};

const SONG_COLUMNS: &str =
    "id, title, slug, lyrics, cover_art, artist_id, album_id, track_number, created_at";

/// Database row for song table
#[derive(Debug, FromRow)]
struct SongRow {
    id: i64,
    title: String,
    slug: String,
    lyrics: String,
    cover_art: Option<String>,
    artist_id: i64,
    album_id: Option<i64>,
    track_number: Option<i32>,
    created_at: i64,
}

impl SongRow {
    fn into_song(self) -> Song {
        Song {
            id: self.id,
            title: self.title,
            slug: self.slug,
            lyrics: self.lyrics,
            cover_art: self.cover_art,
            artist_id: self.artist_id,
            album_id: self.album_id,
            track_number: self.track_number,
            created_at: self.created_at,
        }
    }
}

/// Song joined with its artist and (optional) album
#[derive(Debug, FromRow)]
struct SongCardRow {
    id: i64,
    slug: String,
    title: String,
    cover_art: Option<String>,
    artist_id: i64,
    album_id: Option<i64>,
    artist_name: Option<String>,
    artist_slug: Option<String>,
    album_title: Option<String>,
    album_slug: Option<String>,
    album_year: Option<i32>,
    album_art: Option<String>,
}

impl SongCardRow {
    fn into_card(self) -> CatalogResult<SongCard> {
        let artist = match (self.artist_name, self.artist_slug) {
            (Some(name), Some(slug)) => ArtistRef { name, slug },
            _ => return Err(CatalogError::broken_relation("artist", self.artist_id)),
        };

        let album = match (self.album_id, self.album_title, self.album_slug) {
            (None, _, _) => None,
            (Some(_), Some(title), Some(slug)) => Some(AlbumRef {
                title,
                slug,
                year: self.album_year,
                album_art: self.album_art,
            }),
            (Some(album_id), _, _) => return Err(CatalogError::broken_relation("album", album_id)),
        };

        Ok(SongCard {
            id: self.id,
            slug: self.slug,
            title: self.title,
            cover_art: self.cover_art,
            artist,
            album,
        })
    }
}

const SONG_CARD_SELECT: &str = r#"
    SELECT s.id, s.slug, s.title, s.cover_art, s.artist_id, s.album_id,
           ar.name AS artist_name, ar.slug AS artist_slug,
           al.title AS album_title, al.slug AS album_slug,
           al.year AS album_year, al.album_art AS album_art
    FROM song s
    LEFT JOIN artist ar ON ar.id = s.artist_id
    LEFT JOIN album al ON al.id = s.album_id
"#;

/// Song table operations
pub struct SongTable;

impl SongTable {
    /// Get a song by exact slug
    pub async fn find_by_slug(engine: &DbEngine, slug: &str) -> CatalogResult<Option<Song>> {
        let query = format!("SELECT {} FROM song WHERE slug = ?", SONG_COLUMNS);
        let row: Option<SongRow> = sqlx::query_as(&query)
            .bind(slug)
            .fetch_optional(engine.pool())
            .await?;

        Ok(row.map(SongRow::into_song))
    }

    /// Get an album's tracks in store order (track number, then title)
    pub async fn by_album(engine: &DbEngine, album_id: i64) -> CatalogResult<Vec<Song>> {
        let query = format!(
            "SELECT {} FROM song WHERE album_id = ? ORDER BY track_number, title, id",
            SONG_COLUMNS
        );
        let rows: Vec<SongRow> = sqlx::query_as(&query)
            .bind(album_id)
            .fetch_all(engine.pool())
            .await?;

        Ok(rows.into_iter().map(SongRow::into_song).collect())
    }

    /// Get an artist's songs that belong to no album, ordered by title
    pub async fn singles_by_artist(engine: &DbEngine, artist_id: i64) -> CatalogResult<Vec<Song>> {
        let query = format!(
            "SELECT {} FROM song WHERE artist_id = ? AND album_id IS NULL ORDER BY title, id",
            SONG_COLUMNS
        );
        let rows: Vec<SongRow> = sqlx::query_as(&query)
            .bind(artist_id)
            .fetch_all(engine.pool())
            .await?;

        Ok(rows.into_iter().map(SongRow::into_song).collect())
    }

    /// Case-sensitive substring search on title or lyrics
    pub async fn search_by_title_or_lyrics(
        engine: &DbEngine,
        needle: &str,
        limit: usize,
    ) -> CatalogResult<Vec<SongCard>> {
        debug!("Searching songs for {:?}", needle);

        let query = format!(
            "{} WHERE instr(s.title, ?) > 0 OR instr(s.lyrics, ?) > 0 ORDER BY s.id LIMIT ?",
            SONG_CARD_SELECT
        );
        let rows: Vec<SongCardRow> = sqlx::query_as(&query)
            .bind(needle)
            .bind(needle)
            .bind(limit as i64)
            .fetch_all(engine.pool())
            .await?;

        rows.into_iter().map(SongCardRow::into_card).collect()
    }

    /// Get the most recently added songs
    pub async fn recent(engine: &DbEngine, limit: usize) -> CatalogResult<Vec<SongCard>> {
        let query = format!(
            "{} ORDER BY s.created_at DESC, s.id DESC LIMIT ?",
            SONG_CARD_SELECT
        );
        let rows: Vec<SongCardRow> = sqlx::query_as(&query)
            .bind(limit as i64)
            .fetch_all(engine.pool())
            .await?;

        rows.into_iter().map(SongCardRow::into_card).collect()
    }
}
