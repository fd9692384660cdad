//! Song API routes
//!
//! A song page carries its lyrics split into display lines, the effective
//! artwork, and the other tracks of its album in play order.

use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use super::{resolved_page, AppState};
use crate::core::{Artwork, LyricsLib, PageMeta, SortLib};
use crate::errors::CatalogError;
use crate::models::{AlbumRef, ArtistRef, EntityKind, Song, SongDetail};

/// Song page payload
#[derive(Debug, Serialize)]
pub struct SongPage {
    pub meta: PageMeta,
    pub song: Song,
    pub artist: ArtistRef,
    pub album: Option<AlbumRef>,
    pub art: String,
    pub lines: Vec<String>,
    pub siblings: Vec<Song>,
}

impl From<SongDetail> for SongPage {
    fn from(detail: SongDetail) -> Self {
        let meta = PageMeta::for_song(&detail);
        let art = detail.effective_art().to_string();
        let lines = LyricsLib::lines(&detail.song.lyrics);
        let siblings = SortLib::sibling_tracks(&detail);
        let album = detail.album.as_ref().map(|a| a.album.as_ref_item());

        Self {
            meta,
            song: detail.song,
            artist: detail.artist,
            album,
            art,
            lines,
            siblings,
        }
    }
}

/// Configure song routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_song);
}

/// GET /songs/{slug}
#[get("/{slug}")]
pub async fn get_song(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, CatalogError> {
    let slug = path.into_inner();
    resolved_page(&state, EntityKind::Song, &slug).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lyrics::BLANK_LINE;
    use crate::core::SlugResolver;
    use crate::testing::{seeded_engine, ROOTS_ART};

    #[tokio::test]
    async fn test_song_page_from_detail() {
        let engine = seeded_engine().await;
        let detail = SlugResolver::song(&engine, "intro").await.unwrap();
        let page = SongPage::from(detail);

        assert_eq!(page.art, ROOTS_ART);
        assert_eq!(page.lines, vec!["Hello there", BLANK_LINE, "Good to see you"]);
        assert_eq!(page.album.map(|a| a.slug), Some("roots".to_string()));
        let siblings: Vec<_> = page.siblings.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(siblings, vec!["outro"]);
        assert_eq!(page.meta.title, "Intro Lyrics - Aster");
    }

    #[tokio::test]
    async fn test_single_has_no_siblings() {
        let engine = seeded_engine().await;
        let detail = SlugResolver::song(&engine, "lantern").await.unwrap();
        let page = SongPage::from(detail);

        assert!(page.album.is_none());
        assert!(page.siblings.is_empty());
        assert_eq!(page.lines, vec!["Light the way"]);
    }
}
