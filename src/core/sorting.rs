//! Canonical track order within an album

use std::collections::HashSet;

use crate::models::{Song, SongDetail};

/// Sorting library
pub struct SortLib;

impl SortLib {
    /// Order an album's tracks
    ///
    /// Ascending track number when every track has one and no number repeats,
    /// otherwise ascending title (ordinal byte comparison). Ties break on ID so
    /// the result is a total order.
    pub fn ordered_tracks(tracks: &[Song]) -> Vec<Song> {
        let mut sorted = tracks.to_vec();

        if Self::has_consistent_numbers(tracks) {
            sorted.sort_by(|a, b| {
                a.track_number
                    .cmp(&b.track_number)
                    .then_with(|| a.id.cmp(&b.id))
            });
        } else {
            sorted.sort_by(|a, b| {
                a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id))
            });
        }

        sorted
    }

    /// The other tracks of the song's album, in album order
    ///
    /// Empty when the song is a single.
    pub fn sibling_tracks(detail: &SongDetail) -> Vec<Song> {
        let Some(album) = &detail.album else {
            return Vec::new();
        };

        Self::ordered_tracks(&album.tracks)
            .into_iter()
            .filter(|track| track.id != detail.song.id)
            .collect()
    }

    /// Every track numbered, each number used once
    fn has_consistent_numbers(tracks: &[Song]) -> bool {
        let mut seen = HashSet::with_capacity(tracks.len());
        tracks
            .iter()
            .all(|t| t.track_number.is_some_and(|n| seen.insert(n)))
    }
}
