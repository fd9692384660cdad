//! Data models for the lyrics catalog
//!
//! Plain records read from the store plus the resolved views handed to
//! consumers. Nothing here carries markup.

mod album;
mod artist;
mod enums;
mod song;

pub use album::{Album, AlbumCard, AlbumDetail, AlbumRef, AlbumWithTracks};
pub use artist::{Artist, ArtistCard, ArtistDetail, ArtistRef};
pub use enums::EntityKind;
pub use song::{Song, SongCard, SongDetail};
