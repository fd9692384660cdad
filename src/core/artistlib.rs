//! Alphabetical artist index

use serde::Serialize;

use crate::db::{ArtistTable, DbEngine};
use crate::errors::CatalogResult;
use crate::models::{Artist, ArtistRef};

/// Bucket for names that do not start with a Latin letter
pub const OTHER_INITIAL: char = '#';

/// Artists sharing an initial
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterGroup {
    pub letter: char,
    pub artists: Vec<ArtistRef>,
}

/// Artist library functions
pub struct ArtistLib;

impl ArtistLib {
    /// All artists grouped by initial, A to Z then `#`
    pub async fn index(engine: &DbEngine) -> CatalogResult<Vec<LetterGroup>> {
        let artists = ArtistTable::all_by_name(engine).await?;
        Ok(Self::group_by_letter(&artists))
    }

    /// Group artists (already ordered by name) by initial, keeping their order
    /// within each group. Empty letters are omitted.
    pub fn group_by_letter(artists: &[Artist]) -> Vec<LetterGroup> {
        let mut groups: Vec<LetterGroup> = ('A'..='Z')
            .chain(std::iter::once(OTHER_INITIAL))
            .map(|letter| LetterGroup {
                letter,
                artists: Vec::new(),
            })
            .collect();

        for artist in artists {
            let letter = Self::initial(&artist.name);
            let slot = match letter {
                'A'..='Z' => (letter as u8 - b'A') as usize,
                _ => groups.len() - 1,
            };
            groups[slot].artists.push(artist.as_ref_item());
        }

        groups.retain(|group| !group.artists.is_empty());
        groups
    }

    /// Upper-cased first letter, transliterated to ASCII
    pub fn initial(name: &str) -> char {
        name.trim()
            .chars()
            .next()
            .and_then(|c| deunicode::deunicode_char(c))
            .and_then(|ascii| ascii.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .filter(char::is_ascii_uppercase)
            .unwrap_or(OTHER_INITIAL)
    }
}
