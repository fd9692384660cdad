//! Home API routes

use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use super::{AppState, Illustrated};
use crate::core::HomepageLib;
use crate::errors::CatalogError;
use crate::models::{AlbumCard, ArtistRef, SongCard};

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub songs: Vec<Illustrated<SongCard>>,
    pub albums: Vec<Illustrated<AlbumCard>>,
    pub artists: Vec<ArtistRef>,
}

/// Configure home routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_home);
}

/// GET /home - newest songs and albums plus every artist
#[get("")]
pub async fn get_home(state: web::Data<AppState>) -> Result<HttpResponse, CatalogError> {
    let featured = state.run(HomepageLib::featured(&state.engine)).await?;

    Ok(HttpResponse::Ok().json(HomeResponse {
        songs: Illustrated::all(featured.songs),
        albums: Illustrated::all(featured.albums),
        artists: featured.artists,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::artwork::DEFAULT_COVER;
    use crate::testing::{seeded_engine, ROOTS_ART};
    use actix_web::{test, App};
    use std::time::Duration;

    #[actix_web::test]
    async fn test_home_cards_carry_art() {
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

        let req = test::TestRequest::get().uri("/home").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        // newest first; album art wins over a song's own cover
        assert_eq!(body["songs"][0]["slug"], "lantern");
        assert_eq!(body["songs"][0]["art"], DEFAULT_COVER);
        assert_eq!(body["songs"][4]["slug"], "outro");
        assert_eq!(body["songs"][4]["art"], ROOTS_ART);

        assert_eq!(body["albums"][0]["slug"], "second-wind");
        assert_eq!(body["albums"][0]["art"], DEFAULT_COVER);
        assert_eq!(body["albums"][2]["art"], ROOTS_ART);
        assert_eq!(body["artists"].as_array().map(Vec::len), Some(3));
    }
}
