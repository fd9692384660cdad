//! Home page listings

use serde::Serialize;

use crate::db::{AlbumTable, ArtistTable, DbEngine, SongTable};
use crate::errors::CatalogResult;
use crate::models::{AlbumCard, ArtistRef, SongCard};

/// Newest songs shown on the home page
pub const FEATURED_SONGS: usize = 9;
/// Newest albums shown on the home page
pub const FEATURED_ALBUMS: usize = 12;

/// Home page content
#[derive(Debug, Clone, Serialize)]
pub struct Featured {
    /// Most recently added songs, newest first
    pub songs: Vec<SongCard>,
    /// Most recently added albums, newest first
    pub albums: Vec<AlbumCard>,
    /// Every artist, ordered by name
    pub artists: Vec<ArtistRef>,
}

/// Homepage library
pub struct HomepageLib;

impl HomepageLib {
    pub async fn featured(engine: &DbEngine) -> CatalogResult<Featured> {
        let (songs, albums, artists) = tokio::try_join!(
            SongTable::recent(engine, FEATURED_SONGS),
            AlbumTable::recent(engine, FEATURED_ALBUMS),
            ArtistTable::all_by_name(engine)
        )?;

        Ok(Featured {
            songs,
            albums,
            artists: artists.iter().map(|a| a.as_ref_item()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::seeded_engine;

    #[tokio::test]
    async fn test_featured_is_newest_first() {
        let engine = seeded_engine().await;
        let featured = HomepageLib::featured(&engine).await.unwrap();

        let songs: Vec<&str> = featured.songs.iter().map(|s| s.slug.as_str()).collect();
        let songs = songs.join(",");
        assert_eq!(songs, "lantern,anthem,zephyr,wildflower,outro,intro");

        let albums: Vec<&str> = featured.albums.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(albums, vec!["second-wind", "early-days", "roots"]);

        let artists: Vec<&str> = featured.artists.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(artists, vec!["aster", "bellwether", "cobalt"]);
    }
}
