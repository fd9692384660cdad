//! Slug resolution with eager relation loading
//!
//! Slugs match exactly and case-sensitively. A slug with no row is
//! `NotFound`; a row whose required relation is missing fails the whole
//! resolution rather than yielding a partial entity.

use futures::future::try_join_all;
use tracing::debug;

use crate::core::SortLib;
use crate::db::{AlbumTable, ArtistTable, DbEngine, SongTable};
use crate::errors::{CatalogError, CatalogResult};
use crate::models::{
    Album, AlbumDetail, AlbumWithTracks, ArtistDetail, ArtistRef, EntityKind, SongDetail,
};

/// Any resolved entity
#[derive(Debug, Clone)]
pub enum Resolved {
    Artist(ArtistDetail),
    Album(AlbumDetail),
    Song(SongDetail),
}

impl Resolved {
    pub fn kind(&self) -> EntityKind {
        match self {
            Resolved::Artist(_) => EntityKind::Artist,
            Resolved::Album(_) => EntityKind::Album,
            Resolved::Song(_) => EntityKind::Song,
        }
    }

    pub fn slug(&self) -> &str {
        match self {
            Resolved::Artist(detail) => &detail.artist.slug,
            Resolved::Album(detail) => &detail.album.slug,
            Resolved::Song(detail) => &detail.song.slug,
        }
    }
}

/// Slug resolver
pub struct SlugResolver;

impl SlugResolver {
    /// Resolve a slug of the given kind
    pub async fn resolve(
        engine: &DbEngine,
        kind: EntityKind,
        slug: &str,
    ) -> CatalogResult<Resolved> {
        match kind {
            EntityKind::Artist => Self::artist(engine, slug).await.map(Resolved::Artist),
            EntityKind::Album => Self::album(engine, slug).await.map(Resolved::Album),
            EntityKind::Song => Self::song(engine, slug).await.map(Resolved::Song),
        }
    }

    /// Artist with albums (oldest first, each with ordered tracks) and singles
    pub async fn artist(engine: &DbEngine, slug: &str) -> CatalogResult<ArtistDetail> {
        debug!("Resolving artist {:?}", slug);

        let artist = ArtistTable::find_by_slug(engine, slug)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Artist, slug))?;

        let (albums, singles) = tokio::try_join!(
            AlbumTable::by_artist(engine, artist.id),
            SongTable::singles_by_artist(engine, artist.id)
        )?;

        let albums = try_join_all(
            albums
                .into_iter()
                .map(|album| Self::with_tracks(engine, album)),
        )
        .await?;

        Ok(ArtistDetail {
            artist,
            albums,
            singles,
        })
    }

    /// Album with its artist and ordered tracks
    pub async fn album(engine: &DbEngine, slug: &str) -> CatalogResult<AlbumDetail> {
        debug!("Resolving album {:?}", slug);

        let album = AlbumTable::find_by_slug(engine, slug)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Album, slug))?;

        let (artist, tracks) = tokio::try_join!(
            Self::artist_ref(engine, album.artist_id),
            SongTable::by_album(engine, album.id)
        )?;

        Ok(AlbumDetail {
            album,
            artist,
            tracks: SortLib::ordered_tracks(&tracks),
        })
    }

    /// Song with its artist and, when present, its album and full track list
    pub async fn song(engine: &DbEngine, slug: &str) -> CatalogResult<SongDetail> {
        debug!("Resolving song {:?}", slug);

        let song = SongTable::find_by_slug(engine, slug)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Song, slug))?;

        let artist = Self::artist_ref(engine, song.artist_id).await?;

        let album = match song.album_id {
            Some(album_id) => {
                let album = AlbumTable::find_by_id(engine, album_id)
                    .await?
                    .ok_or_else(|| CatalogError::broken_relation("album", album_id))?;
                Some(Self::with_tracks(engine, album).await?)
            }
            None => None,
        };

        Ok(SongDetail {
            song,
            artist,
            album,
        })
    }

    async fn artist_ref(engine: &DbEngine, artist_id: i64) -> CatalogResult<ArtistRef> {
        ArtistTable::find_by_id(engine, artist_id)
            .await?
            .map(|artist| artist.as_ref_item())
            .ok_or_else(|| CatalogError::broken_relation("artist", artist_id))
    }

    async fn with_tracks(engine: &DbEngine, album: Album) -> CatalogResult<AlbumWithTracks> {
        let tracks = SongTable::by_album(engine, album.id).await?;
        Ok(AlbumWithTracks {
            album,
            tracks: SortLib::ordered_tracks(&tracks),
        })
    }
}
