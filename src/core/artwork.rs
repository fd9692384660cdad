//! Display artwork fallback chains
//!
//! - song: album art, then the song's own cover, then [`DEFAULT_COVER`]
//! - album: own art, then [`DEFAULT_COVER`]
//! - artist: own image, then [`DEFAULT_ARTIST_IMAGE`]
//!
//! Every lookup is total: with no source present the placeholder is returned.

use crate::models::{
    Album, AlbumCard, AlbumDetail, AlbumWithTracks, Artist, ArtistCard, ArtistDetail, Song,
    SongCard, SongDetail,
};

/// Placeholder for songs and albums without art
pub const DEFAULT_COVER: &str = "/default-cover.png";

/// Placeholder for artists without an image
pub const DEFAULT_ARTIST_IMAGE: &str = "/default-artist.png";

/// First present, non-blank source wins
fn first_present<'a>(candidates: &[Option<&'a str>], placeholder: &'static str) -> &'a str {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|url| !url.trim().is_empty())
        .unwrap_or(placeholder)
}

/// Effective song art given the album's art (if the song has an album)
pub fn song_art<'a>(album_art: Option<&'a str>, cover_art: Option<&'a str>) -> &'a str {
    first_present(&[album_art, cover_art], DEFAULT_COVER)
}

pub fn album_art(album_art: Option<&str>) -> &str {
    first_present(&[album_art], DEFAULT_COVER)
}

pub fn artist_image(image: Option<&str>) -> &str {
    first_present(&[image], DEFAULT_ARTIST_IMAGE)
}

/// Anything that has a display image
pub trait Artwork {
    fn effective_art(&self) -> &str;
}

impl Artwork for SongDetail {
    fn effective_art(&self) -> &str {
        let album_art = self
            .album
            .as_ref()
            .and_then(|a| a.album.album_art.as_deref());
        song_art(album_art, self.song.cover_art.as_deref())
    }
}

impl Artwork for SongCard {
    fn effective_art(&self) -> &str {
        let album_art = self.album.as_ref().and_then(|a| a.album_art.as_deref());
        song_art(album_art, self.cover_art.as_deref())
    }
}

/// A track listed under its album: the album's art applies first
impl Artwork for (&Album, &Song) {
    fn effective_art(&self) -> &str {
        song_art(self.0.album_art.as_deref(), self.1.cover_art.as_deref())
    }
}

impl Artwork for Album {
    fn effective_art(&self) -> &str {
        album_art(self.album_art.as_deref())
    }
}

impl Artwork for AlbumCard {
    fn effective_art(&self) -> &str {
        album_art(self.album_art.as_deref())
    }
}

impl Artwork for AlbumWithTracks {
    fn effective_art(&self) -> &str {
        self.album.effective_art()
    }
}

impl Artwork for AlbumDetail {
    fn effective_art(&self) -> &str {
        self.album.effective_art()
    }
}

impl Artwork for Artist {
    fn effective_art(&self) -> &str {
        artist_image(self.image.as_deref())
    }
}

impl Artwork for ArtistCard {
    fn effective_art(&self) -> &str {
        artist_image(self.image.as_deref())
    }
}

impl Artwork for ArtistDetail {
    fn effective_art(&self) -> &str {
        self.artist.effective_art()
    }
}
