//! Slug listing routes used to pre-render every page

use actix_web::{get, web, HttpResponse};

use super::AppState;
use crate::core::RouteLib;
use crate::errors::CatalogError;

/// Configure slug routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_slugs);
}

/// GET /slugs/{kind} - every slug of artists, albums or songs
#[get("/{kind}")]
pub async fn get_slugs(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, CatalogError> {
    let kind = path.into_inner();
    let read = RouteLib::all_slugs_named(&state.engine, &kind, state.slug_page_size);
    let slugs = state.run(read).await?;

    Ok(HttpResponse::Ok().json(slugs))
}
