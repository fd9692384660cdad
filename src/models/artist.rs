//! Artist model

use serde::{Deserialize, Serialize};

use super::{AlbumWithTracks, Song};

/// An artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// Database ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// Unique URL-safe identifier
    pub slug: String,
    /// Biography
    #[serde(default)]
    pub bio: Option<String>,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Creation time (Unix timestamp)
    #[serde(skip_serializing, default)]
    pub created_at: i64,
}

impl Artist {
    /// Create a new artist with no bio or image
    #[cfg(test)]
    pub fn new(id: i64, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            bio: None,
            image: None,
            created_at: 0,
        }
    }

    pub fn as_ref_item(&self) -> ArtistRef {
        ArtistRef {
            name: self.name.clone(),
            slug: self.slug.clone(),
        }
    }
}

/// Name and slug of an artist, eagerly loaded alongside songs and albums
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
    pub name: String,
    pub slug: String,
}

/// Artist as listed in search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistCard {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl From<Artist> for ArtistCard {
    fn from(artist: Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            slug: artist.slug,
            bio: artist.bio,
            image: artist.image,
        }
    }
}

/// An artist with their discography
///
/// Albums are ordered by ascending year (undated albums last), each carrying
/// its ordered track list. Singles are the artist's songs without an album,
/// ordered by title.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub albums: Vec<AlbumWithTracks>,
    pub singles: Vec<Song>,
}
