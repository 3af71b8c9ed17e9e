//! Playlist manifests
//!
//! A manifest is a TOML description of a playlist's starting state:
//!
//! ```toml
//! name = "Road Trip"
//! likes = ["alice", "bob"]
//!
//! [[songs]]
//! title = "Highway Star"
//! artist = "Deep Purple"
//! duration_secs = 370
//!
//! [[comments]]
//! user = "alice"
//! text = "perfect for the motorway"
//! ```
//!
//! Manifests are read-only input; nothing is ever written back.

use crate::error::{CliError, Result};
use mixtape_core::{IdGenerator, Playlist, Track};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaylistManifest {
    pub name: String,

    #[serde(default)]
    pub songs: Vec<Track>,

    #[serde(default)]
    pub likes: Vec<String>,

    #[serde(default)]
    pub comments: Vec<CommentEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CommentEntry {
    pub user: String,
    pub text: String,
}

impl PlaylistManifest {
    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Manifest(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(content)?;
        if manifest.name.trim().is_empty() {
            return Err(CliError::Manifest("playlist name is empty".to_string()));
        }
        Ok(manifest)
    }

    /// Build the in-memory playlist: songs in manifest order, then likes,
    /// then comments
    pub fn build(&self, id_generator: Arc<dyn IdGenerator>) -> Result<Playlist<Track>> {
        let mut playlist = Playlist::<Track>::with_generator(self.name.clone(), id_generator);

        for song in &self.songs {
            playlist.add_song(Arc::new(song.clone()));
        }

        for user in &self.likes {
            if !playlist.like(user.as_str())? {
                tracing::warn!("Duplicate like from '{}' in manifest", user);
            }
        }

        for comment in &self.comments {
            playlist.add_comment(comment.user.as_str(), comment.text.as_str())?;
        }

        tracing::info!(
            "Loaded playlist '{}' with {} songs, {} likes, {} comments",
            playlist.name(),
            playlist.len(),
            playlist.likes_count(),
            playlist.comment_count()
        );
        Ok(playlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixtape_core::{MixtapeError, SequentialIdGenerator, UuidGenerator};

    const ROAD_TRIP: &str = r#"
name = "Road Trip"
likes = ["alice", "bob", "alice"]

[[songs]]
title = "A"
artist = "Band"
duration_secs = 180

[[songs]]
title = "B"
artist = "Other"
duration_secs = 200
album = "Live"

[[comments]]
user = "alice"
text = "great"

[[comments]]
user = "carol"
text = ""
"#;

    #[test]
    fn parse_full_manifest() {
        let manifest = PlaylistManifest::parse(ROAD_TRIP).unwrap();

        assert_eq!(manifest.name, "Road Trip");
        assert_eq!(manifest.songs.len(), 2);
        assert_eq!(manifest.songs[1].album.as_deref(), Some("Live"));
        assert_eq!(manifest.likes.len(), 3);
        assert_eq!(manifest.comments[1].text, "");
    }

    #[test]
    fn build_applies_everything() {
        let manifest = PlaylistManifest::parse(ROAD_TRIP).unwrap();
        let playlist = manifest
            .build(Arc::new(SequentialIdGenerator::new("t")))
            .unwrap();

        assert_eq!(playlist.id().as_str(), "t-1");
        assert_eq!(playlist.total_duration_secs(), 380);
        assert_eq!(playlist.likes_count(), 2);
        assert_eq!(playlist.comment_count(), 2);
        assert!(playlist.comments_by("carol").is_some());
    }

    #[test]
    fn only_name_is_required() {
        let manifest = PlaylistManifest::parse(r#"name = "Empty""#).unwrap();
        let playlist = manifest.build(Arc::new(UuidGenerator)).unwrap();
        assert!(playlist.is_empty());
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = PlaylistManifest::parse(r#"name = "  ""#).unwrap_err();
        assert!(matches!(err, CliError::Manifest(_)));
    }

    #[test]
    fn empty_user_fails_the_build() {
        let manifest = PlaylistManifest::parse(
            r#"
name = "Bad"
likes = [""]
"#,
        )
        .unwrap();

        let err = manifest.build(Arc::new(UuidGenerator)).unwrap_err();
        assert!(matches!(
            err,
            CliError::Playlist(MixtapeError::InvalidArgument(_))
        ));
    }
}
