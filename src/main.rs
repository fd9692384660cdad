//! Hahu Lyrics - a read-only lyrics catalog over a relational store
//!
//! Serves artist, album and song pages resolved by slug, catalog search,
//! and the slug listings a static site generator needs.

mod api;
mod config;
mod core;
mod db;
mod errors;
mod models;

#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::api::AppState;
use crate::config::{Paths, Settings};
use crate::core::RouteLib;
use crate::db::DbEngine;
use crate::models::EntityKind;

/// Hahu Lyrics - lyrics catalog server
#[derive(Parser, Debug)]
#[command(name = "hahu-lyrics")]
#[command(version)]
#[command(about = "A read-only lyrics catalog for artists, albums and songs")]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 1980)]
    port: u16,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,

    /// Path to config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the catalog database, overriding settings.json
    #[arg(long)]
    database: Option<PathBuf>,

    /// Print every slug of a kind (artists, albums, songs) and exit
    #[arg(long, value_name = "KIND")]
    list_slugs: Option<EntityKind>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::new(format!("{},sqlx=warn", log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    info!("Hahu Lyrics v{} starting...", env!("CARGO_PKG_VERSION"));

    let paths = Paths::new(args.config)?;
    info!("Config directory: {:?}", paths.config_dir());

    let settings = Settings::load(&paths)?;
    let mut store_options = settings.store_options(&paths);
    if let Some(database) = args.database {
        store_options.database_path = database;
    }

    let engine = DbEngine::connect(&store_options).await?;

    if let Some(kind) = args.list_slugs {
        let page_size = settings.slug_page_size;
        let page_timeout = settings.request_timeout();
        let result = list_slugs(&engine, kind, page_size, page_timeout).await;
        engine.close().await;
        return result;
    }

    let state = AppState {
        engine,
        request_timeout: settings.request_timeout(),
        slug_page_size: settings.slug_page_size,
    };

    serve(args.host, args.port, state).await
}

/// Stream slugs to stdout one per line, a page at a time
async fn list_slugs(
    engine: &DbEngine,
    kind: EntityKind,
    page_size: u32,
    page_timeout: Duration,
) -> Result<()> {
    let print = |slug: String| println!("{}", slug);
    let listing = RouteLib::for_each_slug(engine, kind, page_size, page_timeout, print);
    let count = listing.await?;

    info!("Listed {} {} slugs", count, kind);
    Ok(())
}

async fn serve(host: String, port: u16, state: AppState) -> Result<()> {
    use actix_cors::Cors;
    use actix_web::{middleware, web, App, HttpServer};

    let addr = format!("{}:{}", host, port);
    info!("Server listening on http://{}", addr);

    let engine = state.engine.clone();
    let data = web::Data::new(state);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(data.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(api::configure)
    })
    .bind(addr)?
    .run()
    .await?;

    info!("Shutting down...");
    engine.close().await;

    Ok(())
}
