//! Song contract and the bundled `Track` implementation

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A song that can be stored in a [`Playlist`](crate::Playlist)
///
/// The playlist never constructs or mutates songs; it only reads these
/// accessors, compares songs for equality (`remove_song`) and orders them
/// (`sort_songs`). Implementations must order by title first.
pub trait Song: Ord {
    /// Song title
    fn title(&self) -> &str;

    /// Performing artist
    fn artist(&self) -> &str;

    /// Duration in whole seconds
    fn duration_secs(&self) -> u64;
}

/// Plain song record
///
/// Ordered by title, then artist, duration and album so that the order
/// stays total and consistent with equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Duration in seconds
    pub duration_secs: u64,

    /// Album name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
}

impl Track {
    /// Create a new track without album information
    pub fn new(title: impl Into<String>, artist: impl Into<String>, duration_secs: u64) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration_secs,
            album: None,
        }
    }

    /// Attach an album name
    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }
}

impl Song for Track {
    fn title(&self) -> &str {
        &self.title
    }

    fn artist(&self) -> &str {
        &self.artist
    }

    fn duration_secs(&self) -> u64 {
        self.duration_secs
    }
}

impl Ord for Track {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title
            .cmp(&other.title)
            .then_with(|| self.artist.cmp(&other.artist))
            .then_with(|| self.duration_secs.cmp(&other.duration_secs))
            .then_with(|| self.album.cmp(&other.album))
    }
}

impl PartialOrd for Track {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({}:{:02})",
            self.artist,
            self.title,
            self.duration_secs / 60,
            self.duration_secs % 60
        )
    }
}
