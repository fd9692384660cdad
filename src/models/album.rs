//! Album model

use serde::{Deserialize, Serialize};

use super::{ArtistRef, Song};

/// An album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Database ID
    pub id: i64,
    /// Album title
    pub title: String,
    /// Unique URL-safe identifier
    pub slug: String,
    /// Release year
    #[serde(default)]
    pub year: Option<i32>,
    /// Cover art URL
    #[serde(default)]
    pub album_art: Option<String>,
    /// Owning artist
    pub artist_id: i64,
    /// Creation time (Unix timestamp)
    #[serde(skip_serializing, default)]
    pub created_at: i64,
}

impl Album {
    /// Create a new album with no year or art
    #[cfg(test)]
    pub fn new(id: i64, title: impl Into<String>, slug: impl Into<String>, artist_id: i64) -> Self {
        Self {
            id,
            title: title.into(),
            slug: slug.into(),
            year: None,
            album_art: None,
            artist_id,
            created_at: 0,
        }
    }

    pub fn as_ref_item(&self) -> AlbumRef {
        AlbumRef {
            title: self.title.clone(),
            slug: self.slug.clone(),
            year: self.year,
            album_art: self.album_art.clone(),
        }
    }
}

/// Album fields loaded alongside a song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumRef {
    pub title: String,
    pub slug: String,
    pub year: Option<i32>,
    pub album_art: Option<String>,
}

/// Album as listed in search results and on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumCard {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub year: Option<i32>,
    pub album_art: Option<String>,
    pub artist: ArtistRef,
}

/// An album together with its ordered track list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumWithTracks {
    #[serde(flatten)]
    pub album: Album,
    pub tracks: Vec<Song>,
}

/// A resolved album page: the album, its artist and ordered tracks
#[derive(Debug, Clone, Serialize)]
pub struct AlbumDetail {
    pub album: Album,
    pub artist: ArtistRef,
    pub tracks: Vec<Song>,
}
