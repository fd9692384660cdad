//! Album API routes

use actix_web::{get, web, HttpResponse};

use super::{resolved_page, AppState};
use crate::errors::CatalogError;
use crate::models::EntityKind;

/// Configure album routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_album);
}

/// GET /albums/{slug} - album with its artist and ordered tracks
#[get("/{slug}")]
pub async fn get_album(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, CatalogError> {
    let slug = path.into_inner();
    resolved_page(&state, EntityKind::Album, &slug).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{seeded_engine, ROOTS_ART};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use std::time::Duration;

    #[actix_web::test]
    async fn test_album_page() {
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

        let req = test::TestRequest::get().uri("/albums/roots").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["art"], ROOTS_ART);
        assert_eq!(body["artist"]["slug"], "aster");
        assert_eq!(body["tracks"][0]["slug"], "intro");
        assert_eq!(body["tracks"][1]["slug"], "outro");

        let req = test::TestRequest::get().uri("/albums/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
