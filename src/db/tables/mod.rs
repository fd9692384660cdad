//! Database table operations

mod album_table;
mod artist_table;
mod slug_table;
mod song_table;

pub use album_table::AlbumTable;
pub use artist_table::ArtistTable;
pub use slug_table::SlugTable;
pub use song_table::SongTable;
