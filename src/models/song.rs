//! Song model

use serde::{Deserialize, Serialize};

use super::{AlbumRef, AlbumWithTracks, ArtistRef};

/// A song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Database ID
    pub id: i64,
    /// Song title
    pub title: String,
    /// Unique URL-safe identifier
    pub slug: String,
    /// Raw lyrics text; see `LyricsLib::lines` for display lines
    #[serde(default)]
    pub lyrics: String,
    /// Own cover art, used when the album has none
    #[serde(default)]
    pub cover_art: Option<String>,
    /// Owning artist
    pub artist_id: i64,
    /// Album, if the song is not a standalone single
    #[serde(default)]
    pub album_id: Option<i64>,
    /// Position within the album
    #[serde(default)]
    pub track_number: Option<i32>,
    /// Creation time (Unix timestamp)
    #[serde(skip_serializing, default)]
    pub created_at: i64,
}

impl Song {
    /// Create a new standalone song with empty lyrics
    #[cfg(test)]
    pub fn new(id: i64, title: impl Into<String>, slug: impl Into<String>, artist_id: i64) -> Self {
        Self {
            id,
            title: title.into(),
            slug: slug.into(),
            lyrics: String::new(),
            cover_art: None,
            artist_id,
            album_id: None,
            track_number: None,
            created_at: 0,
        }
    }
}

/// Song as listed in search results and on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongCard {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub cover_art: Option<String>,
    pub artist: ArtistRef,
    pub album: Option<AlbumRef>,
}

/// A resolved song page
///
/// When the song belongs to an album, the album is loaded with its full
/// ordered track list so sibling tracks can be derived without another read.
#[derive(Debug, Clone, Serialize)]
pub struct SongDetail {
    pub song: Song,
    pub artist: ArtistRef,
    pub album: Option<AlbumWithTracks>,
}
