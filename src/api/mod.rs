//! REST API routes for the lyrics catalog
//!
//! Thin JSON layer over `crate::core`. Every store read runs under the
//! configured request timeout, and `CatalogError` maps onto status codes.

pub mod album;
pub mod artist;
pub mod home;
pub mod search;
pub mod slugs;
pub mod song;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error};

use crate::core::{Artwork, PageMeta, Resolved, SlugResolver};
use crate::db::DbEngine;
use crate::errors::{CatalogError, CatalogResult};
use crate::models::EntityKind;

use self::artist::ArtistPage;
use self::song::SongPage;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub engine: DbEngine,
    pub request_timeout: Duration,
    pub slug_page_size: u32,
}

impl AppState {
    /// Run a catalog read, failing as store-unavailable once the request timeout passes
    pub async fn run<T, F>(&self, read: F) -> CatalogResult<T>
    where
        F: Future<Output = CatalogResult<T>>,
    {
        tokio::time::timeout(self.request_timeout, read).await?
    }
}

/// An item serialized alongside its effective artwork URL
#[derive(Debug, Serialize)]
pub struct Illustrated<T: Serialize> {
    #[serde(flatten)]
    pub item: T,
    pub art: String,
}

impl<T: Artwork + Serialize> Illustrated<T> {
    pub fn new(item: T) -> Self {
        let art = item.effective_art().to_string();
        Self { item, art }
    }

    pub fn all(items: Vec<T>) -> Vec<Self> {
        items.into_iter().map(Self::new).collect()
    }
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
            CatalogError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            CatalogError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let CatalogError::StoreUnavailable(reason) = self {
            error!("Store unavailable: {}", reason);
        }
        let body = json!({ "error": self.to_string() });
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Resolve a slug of `kind` and respond with that kind's page payload
///
/// Artist and song misses carry their not-found page metadata.
pub async fn resolved_page(
    state: &AppState,
    kind: EntityKind,
    slug: &str,
) -> Result<HttpResponse, CatalogError> {
    let read = SlugResolver::resolve(&state.engine, kind, slug);

    let resolved = match state.run(read).await {
        Ok(resolved) => resolved,
        Err(err) if err.is_not_found() => return not_found_page(kind, err),
        Err(err) => return Err(err),
    };
    debug!("Resolved {} {:?}", resolved.kind(), resolved.slug());

    let response = match resolved {
        Resolved::Artist(detail) => HttpResponse::Ok().json(ArtistPage::from(detail)),
        Resolved::Album(detail) => HttpResponse::Ok().json(Illustrated::new(detail)),
        Resolved::Song(detail) => HttpResponse::Ok().json(SongPage::from(detail)),
    };
    Ok(response)
}

fn not_found_page(kind: EntityKind, err: CatalogError) -> Result<HttpResponse, CatalogError> {
    let meta = match kind {
        EntityKind::Artist => PageMeta::artist_not_found(),
        EntityKind::Song => PageMeta::song_not_found(),
        EntityKind::Album => return Err(err),
    };

    Ok(HttpResponse::NotFound().json(json!({
        "error": err.to_string(),
        "meta": meta,
    })))
}

/// Configure all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Home page
        .service(web::scope("/home").configure(home::configure))
        // Artist index and pages
        .service(web::scope("/artists").configure(artist::configure))
        // Album pages
        .service(web::scope("/albums").configure(album::configure))
        // Song pages
        .service(web::scope("/songs").configure(song::configure))
        // Search
        .service(web::scope("/search").configure(search::configure))
        // Route enumeration for static generation
        .service(web::scope("/slugs").configure(slugs::configure));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{empty_engine, seeded_engine};
    use actix_web::body::to_bytes;

    #[test]
    fn test_error_status_codes() {
        let not_found = CatalogError::not_found(EntityKind::Song, "nope");
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let down = CatalogError::StoreUnavailable("closed".into());
        assert_eq!(down.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let bad = CatalogError::InvalidInput("kind".into());
        assert_eq!(bad.status_code(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_error_body_carries_message() {
        let err = CatalogError::not_found(EntityKind::Album, "roots");
        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "album not found: roots");
    }

    #[tokio::test]
    async fn test_run_times_out_as_store_unavailable() {
        let state = AppState {
            engine: empty_engine().await,
            request_timeout: Duration::from_millis(10),
            slug_page_size: 10,
        };

        let slow = async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        };
        let result: CatalogResult<()> = state.run(slow).await;
        assert!(matches!(result, Err(CatalogError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_album_miss_is_plain_not_found() {
        let state = AppState {
            engine: seeded_engine().await,
            request_timeout: Duration::from_secs(5),
            slug_page_size: 10,
        };

        let result = resolved_page(&state, EntityKind::Album, "nope").await;
        assert!(matches!(result, Err(CatalogError::NotFound { .. })));

        let response = resolved_page(&state, EntityKind::Song, "nope").await;
        assert_eq!(response.unwrap().status(), StatusCode::NOT_FOUND);
    }
}
