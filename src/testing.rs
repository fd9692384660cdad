//! Shared fixtures for tests: an in-memory catalog with a small discography

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use crate::db::DbEngine;
use crate::models::{Album, Artist, Song};

/// 120 characters
pub fn long_bio() -> String {
    "Bellwether play slow folk songs about weather. "
        .repeat(3)
        .chars()
        .take(120)
        .collect()
}

/// 40 characters
pub const SHORT_BIO: &str = "Cobalt make bright electronic pop music.";

pub const ASTER_IMAGE: &str = "https://cdn.example.com/aster.jpg";
pub const ROOTS_ART: &str = "https://cdn.example.com/roots.jpg";
pub const OUTRO_ART: &str = "https://cdn.example.com/outro.jpg";
pub const WILDFLOWER_ART: &str = "https://cdn.example.com/wildflower.jpg";

/// An empty catalog on a single in-memory connection
pub async fn empty_engine() -> DbEngine {
    // one long-lived connection, otherwise each connection sees its own database
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(false);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    let engine = DbEngine::from_pool(pool);
    engine.create_tables().await.unwrap();
    engine
}

/// Catalog with three artists:
///
/// - Aster: album "Roots" (2020, with art) holding "Intro" (1) and "Outro" (2),
///   plus the single "Wildflower"
/// - Bellwether: "Second Wind" (2019) empty, "Early Days" (no year) holding
///   unnumbered "Zephyr" and "Anthem"
/// - Cobalt: the single "Lantern" with no art anywhere
pub async fn seeded_engine() -> DbEngine {
    let engine = empty_engine().await;

    let mut aster = Artist::new(1, "Aster", "aster");
    aster.image = Some(ASTER_IMAGE.to_string());
    aster.created_at = 100;
    let mut bellwether = Artist::new(2, "Bellwether", "bellwether");
    bellwether.bio = Some(long_bio());
    bellwether.created_at = 200;
    let mut cobalt = Artist::new(3, "Cobalt", "cobalt");
    cobalt.bio = Some(SHORT_BIO.to_string());
    cobalt.created_at = 300;
    for artist in [&aster, &bellwether, &cobalt] {
        insert_artist(&engine, artist).await;
    }

    let mut roots = Album::new(1, "Roots", "roots", 1);
    roots.year = Some(2020);
    roots.album_art = Some(ROOTS_ART.to_string());
    roots.created_at = 1000;
    let mut early_days = Album::new(2, "Early Days", "early-days", 2);
    early_days.created_at = 2000;
    let mut second_wind = Album::new(3, "Second Wind", "second-wind", 2);
    second_wind.year = Some(2019);
    second_wind.created_at = 3000;
    for album in [&roots, &early_days, &second_wind] {
        insert_album(&engine, album).await;
    }

    let mut intro = song(1, "Intro", 1, "Hello there\n\nGood to see you");
    intro.album_id = Some(1);
    intro.track_number = Some(1);
    let mut outro = song(2, "Outro", 1, "Goodbye\\nfor now");
    outro.album_id = Some(1);
    outro.track_number = Some(2);
    outro.cover_art = Some(OUTRO_ART.to_string());
    let mut wildflower = song(3, "Wildflower", 1, "Petals in the rain");
    wildflower.cover_art = Some(WILDFLOWER_ART.to_string());
    let mut zephyr = song(4, "Zephyr", 2, "Wind song");
    zephyr.album_id = Some(2);
    let mut anthem = song(5, "Anthem", 2, "Sing along");
    anthem.album_id = Some(2);
    let lantern = song(6, "Lantern", 3, "Light the way");

    let songs = [intro, outro, wildflower, zephyr, anthem, lantern];
    for song in &songs {
        insert_song(&engine, song).await;
    }

    engine
}

/// Song slugged by its lowercased title, created in ID order
pub fn song(id: i64, title: &str, artist_id: i64, lyrics: &str) -> Song {
    let mut song = Song::new(id, title, title.to_lowercase(), artist_id);
    song.lyrics = lyrics.to_string();
    song.created_at = id * 10;
    song
}

/// Non-positive IDs let SQLite assign one
fn row_id(id: i64) -> Option<i64> {
    (id > 0).then_some(id)
}

pub async fn insert_artist(engine: &DbEngine, artist: &Artist) {
    sqlx::query(
        "INSERT INTO artist (id, name, slug, bio, image, created_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(row_id(artist.id))
    .bind(&artist.name)
    .bind(&artist.slug)
    .bind(&artist.bio)
    .bind(&artist.image)
    .bind(artist.created_at)
    .execute(engine.pool())
    .await
    .unwrap();
}

pub async fn insert_album(engine: &DbEngine, album: &Album) {
    sqlx::query(
        "INSERT INTO album (id, title, slug, year, album_art, artist_id, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(row_id(album.id))
    .bind(&album.title)
    .bind(&album.slug)
    .bind(album.year)
    .bind(&album.album_art)
    .bind(album.artist_id)
    .bind(album.created_at)
    .execute(engine.pool())
    .await
    .unwrap();
}

pub async fn insert_song(engine: &DbEngine, song: &Song) {
    sqlx::query(
        "INSERT INTO song (id, title, slug, lyrics, cover_art, artist_id, album_id, track_number, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(row_id(song.id))
    .bind(&song.title)
    .bind(&song.slug)
    .bind(&song.lyrics)
    .bind(&song.cover_art)
    .bind(song.artist_id)
    .bind(song.album_id)
    .bind(song.track_number)
    .bind(song.created_at)
    .execute(engine.pool())
    .await
    .unwrap();
}
