//! Catalog store adapter
//!
//! Typed, read-only queries over the artist, album and song tables using
//! SQLx with SQLite. Relation loading and ordering are pushed to the store.

mod engine;
pub mod tables;

pub use engine::{DbEngine, StoreOptions};
pub use tables::*;
