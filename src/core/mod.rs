//! Core catalog library
//!
//! Slug resolution, artwork fallback, track ordering, lyrics lines, search
//! and route enumeration. Everything that reads takes the `DbEngine`
//! explicitly; the rest are pure functions over resolved models.

pub mod artistlib;
pub mod artwork;
pub mod homepage;
pub mod lyrics;
pub mod metadata;
pub mod resolver;
pub mod routes;
pub mod search;
pub mod sorting;

pub use artistlib::ArtistLib;
pub use artwork::Artwork;
pub use homepage::HomepageLib;
pub use lyrics::LyricsLib;
pub use metadata::PageMeta;
pub use resolver::{Resolved, SlugResolver};
pub use routes::RouteLib;
pub use search::{SearchLib, SearchOutcome};
pub use sorting::SortLib;
