//! Artist API routes

use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use super::{resolved_page, AppState, Illustrated};
use crate::core::artwork::song_art;
use crate::core::{ArtistLib, Artwork, PageMeta};
use crate::errors::CatalogError;
use crate::models::{AlbumWithTracks, Artist, ArtistDetail, EntityKind, Song};

/// Artist page payload
#[derive(Debug, Serialize)]
pub struct ArtistPage {
    pub meta: PageMeta,
    pub artist: Artist,
    pub image: String,
    pub albums: Vec<Illustrated<AlbumWithTracks>>,
    pub singles: Vec<Illustrated<Song>>,
}

impl From<ArtistDetail> for ArtistPage {
    fn from(detail: ArtistDetail) -> Self {
        let meta = PageMeta::for_artist(&detail.artist);
        let image = detail.effective_art().to_string();
        let singles = detail.singles.into_iter().map(illustrate_single).collect();

        Self {
            meta,
            artist: detail.artist,
            image,
            albums: Illustrated::all(detail.albums),
            singles,
        }
    }
}

fn illustrate_single(song: Song) -> Illustrated<Song> {
    let art = song_art(None, song.cover_art.as_deref()).to_string();
    Illustrated { item: song, art }
}

/// Configure artist routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_artist_index).service(get_artist);
}

/// GET /artists - every artist grouped by initial letter
#[get("")]
pub async fn get_artist_index(state: web::Data<AppState>) -> Result<HttpResponse, CatalogError> {
    let groups = state.run(ArtistLib::index(&state.engine)).await?;
    Ok(HttpResponse::Ok().json(groups))
}

/// GET /artists/{slug}
#[get("/{slug}")]
pub async fn get_artist(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, CatalogError> {
    let slug = path.into_inner();
    resolved_page(&state, EntityKind::Artist, &slug).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::artwork::DEFAULT_COVER;
    use crate::core::SlugResolver;
    use crate::testing::{seeded_engine, ASTER_IMAGE, ROOTS_ART, WILDFLOWER_ART};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use std::time::Duration;

    #[tokio::test]
    async fn test_artist_page_art() {
        let engine = seeded_engine().await;
        let detail = SlugResolver::artist(&engine, "aster").await.unwrap();
        let page = ArtistPage::from(detail);

        assert_eq!(page.image, ASTER_IMAGE);
        assert_eq!(page.meta.title, "Aster • Hahu Lyrics");
        assert_eq!(page.albums[0].art, ROOTS_ART);
        assert_eq!(page.singles[0].art, WILDFLOWER_ART);
    }

    #[actix_web::test]
    async fn test_unknown_artist_is_404_with_meta() {
        let state = AppState {
            engine: seeded_engine().await,
            request_timeout: Duration::from_secs(5),
            slug_page_size: 10,
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(crate::api::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/artists/nobody").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["meta"]["title"], "Artist not found • Hahu Lyrics");

        let req = test::TestRequest::get()
            .uri("/artists/bellwether")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["image"], "/default-artist.png");
        assert_eq!(body["albums"][0]["art"], DEFAULT_COVER);
    }
}
