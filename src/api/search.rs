//! Search API routes

use actix_web::{get, web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::{AppState, Illustrated};
use crate::core::{SearchLib, SearchOutcome};
use crate::errors::CatalogError;
use crate::models::{AlbumCard, ArtistCard, SongCard};

/// Search query parameters
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SearchResponse {
    NoQuery,
    Results {
        query: String,
        songs: Vec<Illustrated<SongCard>>,
        artists: Vec<Illustrated<ArtistCard>>,
        albums: Vec<Illustrated<AlbumCard>>,
    },
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::NoQuery => Self::NoQuery,
            SearchOutcome::Results(results) => Self::Results {
                query: results.query,
                songs: Illustrated::all(results.songs),
                artists: Illustrated::all(results.artists),
                albums: Illustrated::all(results.albums),
            },
        }
    }
}

/// Configure search routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(search);
}

/// GET /search?q=
#[get("")]
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, CatalogError> {
    let read = SearchLib::search(&state.engine, &query.q);
    let outcome = state.run(read).await?;
    Ok(HttpResponse::Ok().json(SearchResponse::from(outcome)))
}
