//! Fan-out search across songs, artists and albums
//!
//! Each kind gets its own case-sensitive substring query with a hard cap.
//! The three queries run concurrently and are grouped, never ranked against
//! each other. Any store failure fails the whole search.

use serde::Serialize;
use tracing::{debug, info};

use crate::db::{AlbumTable, ArtistTable, DbEngine, SongTable};
use crate::errors::CatalogResult;
use crate::models::{AlbumCard, ArtistCard, SongCard};

/// Maximum songs per search
pub const SONG_LIMIT: usize = 20;
/// Maximum artists per search
pub const ARTIST_LIMIT: usize = 10;
/// Maximum albums per search
pub const ALBUM_LIMIT: usize = 10;
/// Artist bios in results are cut to this many characters
pub const BIO_SNIPPET_CHARS: usize = 80;
/// Appended to a cut bio
pub const ELLIPSIS: char = '…';

/// Grouped results for a non-empty query
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub songs: Vec<SongCard>,
    pub artists: Vec<ArtistCard>,
    pub albums: Vec<AlbumCard>,
}

impl SearchResults {
    /// True when no kind matched
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty() && self.artists.is_empty() && self.albums.is_empty()
    }
}

/// Outcome of a search request
///
/// `NoQuery` (blank input) is distinct from `Results` with empty lists.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SearchOutcome {
    NoQuery,
    Results(SearchResults),
}

/// Search library
pub struct SearchLib;

impl SearchLib {
    /// Search the catalog
    pub async fn search(engine: &DbEngine, raw_query: &str) -> CatalogResult<SearchOutcome> {
        let query = raw_query.trim();
        if query.is_empty() {
            debug!("Empty search query");
            return Ok(SearchOutcome::NoQuery);
        }

        let (songs, artists, albums) = tokio::try_join!(
            Self::search_songs(engine, query),
            Self::search_artists(engine, query),
            Self::search_albums(engine, query)
        )?;

        let results = SearchResults {
            query: query.to_string(),
            songs,
            artists,
            albums,
        };

        if results.is_empty() {
            info!("Search {:?}: no matches", query);
        } else {
            info!(
                "Search {:?}: {} songs, {} artists, {} albums",
                query,
                results.songs.len(),
                results.artists.len(),
                results.albums.len()
            );
        }

        Ok(SearchOutcome::Results(results))
    }

    /// Songs whose title or lyrics contain `query`
    pub async fn search_songs(engine: &DbEngine, query: &str) -> CatalogResult<Vec<SongCard>> {
        let read = SongTable::search_by_title_or_lyrics(engine, query, SONG_LIMIT);
        read.await
    }

    /// Artists whose name contains `query`, bios cut to a snippet
    pub async fn search_artists(engine: &DbEngine, query: &str) -> CatalogResult<Vec<ArtistCard>> {
        let read = ArtistTable::search_by_name(engine, query, ARTIST_LIMIT);
        let artists = read.await?;

        Ok(artists
            .into_iter()
            .map(|artist| {
                let mut card = ArtistCard::from(artist);
                card.bio = card.bio.map(|bio| Self::bio_snippet(&bio));
                card
            })
            .collect())
    }

    /// Albums whose title contains `query`
    pub async fn search_albums(engine: &DbEngine, query: &str) -> CatalogResult<Vec<AlbumCard>> {
        let read = AlbumTable::search_by_title(engine, query, ALBUM_LIMIT);
        read.await
    }

    /// Cut a bio longer than [`BIO_SNIPPET_CHARS`] characters and mark the cut
    pub fn bio_snippet(bio: &str) -> String {
        match bio.char_indices().nth(BIO_SNIPPET_CHARS) {
            Some((cut, _)) => {
                let mut snippet = bio[..cut].to_string();
                snippet.push(ELLIPSIS);
                snippet
            }
            None => bio.to_string(),
        }
    }
}
