//! Page titles and descriptions

use serde::Serialize;

use crate::models::{Artist, SongDetail};

pub const SITE_NAME: &str = "Hahu Lyrics";

/// Title and description for a resolved page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PageMeta {
    pub fn for_song(detail: &SongDetail) -> Self {
        let title = &detail.song.title;
        let artist = &detail.artist.name;
        Self {
            title: format!("{} Lyrics - {}", title, artist),
            description: Some(format!(
                "Read the full lyrics of \"{}\" by {}.",
                title, artist
            )),
        }
    }

    pub fn for_artist(artist: &Artist) -> Self {
        Self {
            title: format!("{} • {}", artist.name, SITE_NAME),
            description: artist.bio.clone(),
        }
    }

    pub fn song_not_found() -> Self {
        Self {
            title: format!("Song not found • {}", SITE_NAME),
            description: None,
        }
    }

    pub fn artist_not_found() -> Self {
        Self {
            title: format!("Artist not found • {}", SITE_NAME),
            description: None,
        }
    }
}
