//! The playlist aggregate
//!
//! A [`Playlist`] owns three containers that change independently:
//! - the ordered song sequence (duplicates allowed)
//! - the set of users who liked the playlist
//! - the comment log, plus a per-user index derived from it
//!
//! Operations that take a song or comment id accept `None` and treat it as a
//! no-op. Operations that take a user id or comment text reject absent or
//! empty values with [`MixtapeError::InvalidArgument`] before touching any
//! state.

use crate::error::{MixtapeError, Result};
use crate::id_generator::{IdGenerator, UuidGenerator};
use crate::types::{Comment, CommentId, PlaylistId, Song, Track, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// In-memory playlist of songs with likes and comments
///
/// Songs are held by shared reference; the playlist never constructs or
/// mutates them.
pub struct Playlist<S = Track> {
    id: PlaylistId,
    name: String,
    created_at: DateTime<Utc>,
    songs: Vec<Arc<S>>,
    liked_by: HashSet<UserId>,
    comments: Vec<Comment>,
    /// Derived from `comments`; a user with no comments has no entry.
    comments_by_user: HashMap<UserId, Vec<CommentId>>,
    id_generator: Arc<dyn IdGenerator>,
}

/// Serializable snapshot of a playlist's headline numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    /// Playlist identifier
    pub id: PlaylistId,
    /// Display name
    pub name: String,
    /// When the playlist was created
    pub created_at: DateTime<Utc>,
    /// Number of songs, duplicates included
    pub song_count: usize,
    /// Sum of song durations in seconds
    pub total_duration_secs: u64,
    /// Number of distinct users who liked the playlist
    pub likes: usize,
    /// Number of comments
    pub comments: usize,
}

impl<S: Song> Playlist<S> {
    /// Create an empty playlist with a random UUID identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_generator(name, Arc::new(UuidGenerator))
    }

    /// Create an empty playlist drawing its own id and all comment ids from
    /// `id_generator`
    pub fn with_generator(name: impl Into<String>, id_generator: Arc<dyn IdGenerator>) -> Self {
        let id = PlaylistId::new(id_generator.next_id());
        let name = name.into();
        tracing::debug!("Created playlist {} ({})", name, id);

        Self {
            id,
            name,
            created_at: Utc::now(),
            songs: Vec::new(),
            liked_by: HashSet::new(),
            comments: Vec::new(),
            comments_by_user: HashMap::new(),
            id_generator,
        }
    }

    // ===== Identity & metadata =====

    /// Identifier assigned at construction
    pub fn id(&self) -> &PlaylistId {
        &self.id
    }

    /// Name given at construction
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Construction timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of songs currently in the playlist
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the playlist has no songs
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Sum of all song durations in seconds (0 for an empty playlist)
    pub fn total_duration_secs(&self) -> u64 {
        self.songs.iter().map(|song| song.duration_secs()).sum()
    }

    /// Snapshot of the headline numbers
    pub fn summary(&self) -> PlaylistSummary {
        PlaylistSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            created_at: self.created_at,
            song_count: self.len(),
            total_duration_secs: self.total_duration_secs(),
            likes: self.likes_count(),
            comments: self.comment_count(),
        }
    }

    // ===== Songs =====

    /// Read-only view of the song sequence
    pub fn songs(&self) -> &[Arc<S>] {
        &self.songs
    }

    /// Append a song to the end of the playlist
    pub fn add_song(&mut self, song: impl Into<Option<Arc<S>>>) {
        let Some(song) = song.into() else {
            return;
        };
        tracing::debug!("Adding '{}' to playlist {}", song.title(), self.id);
        self.songs.push(song);
    }

    /// Insert a song at `pos`
    ///
    /// Positions are clamped: `pos <= 0` inserts at the head and
    /// `pos >= len()` appends.
    pub fn insert_song(&mut self, song: impl Into<Option<Arc<S>>>, pos: i64) {
        let Some(song) = song.into() else {
            return;
        };
        let len = self.songs.len();
        let index = if pos <= 0 {
            0
        } else {
            usize::try_from(pos).map_or(len, |pos| pos.min(len))
        };
        tracing::debug!(
            "Inserting '{}' at {} (requested {}) in playlist {}",
            song.title(),
            index,
            pos,
            self.id
        );
        self.songs.insert(index, song);
    }

    /// Remove the first song equal to `song`
    ///
    /// Returns whether a song was removed.
    pub fn remove_song<'s>(&mut self, song: impl Into<Option<&'s S>>) -> bool
    where
        S: 's,
    {
        let Some(song) = song.into() else {
            return false;
        };
        let Some(index) = self.songs.iter().position(|s| **s == *song) else {
            return false;
        };
        self.songs.remove(index);
        tracing::debug!("Removed '{}' from playlist {}", song.title(), self.id);
        true
    }

    /// Remove every song; likes and comments are kept
    pub fn clear(&mut self) {
        tracing::debug!("Clearing {} songs from playlist {}", self.songs.len(), self.id);
        self.songs.clear();
    }

    /// Stable in-place sort by the song's natural order
    pub fn sort_songs(&mut self) {
        self.songs.sort();
    }

    /// Songs whose title or artist contains `keyword`, ignoring case
    ///
    /// Results keep playlist order. An empty or absent keyword matches
    /// nothing.
    pub fn search<'a>(&self, keyword: impl Into<Option<&'a str>>) -> Vec<Arc<S>> {
        let keyword = match keyword.into() {
            Some(keyword) if !keyword.is_empty() => keyword.to_lowercase(),
            _ => return Vec::new(),
        };

        let matches: Vec<Arc<S>> = self
            .songs
            .iter()
            .filter(|song| {
                song.title().to_lowercase().contains(&keyword)
                    || song.artist().to_lowercase().contains(&keyword)
            })
            .cloned()
            .collect();

        tracing::trace!("Search '{}' matched {} songs", keyword, matches.len());
        matches
    }

    // ===== Likes =====

    /// Record that `user_id` likes the playlist
    ///
    /// Returns `true` if the user had not liked it before.
    pub fn like<'a>(&mut self, user_id: impl Into<Option<&'a str>>) -> Result<bool> {
        let user_id = require_user(user_id.into())?;
        let added = self.liked_by.insert(user_id);
        tracing::debug!("Like on playlist {} (new: {})", self.id, added);
        Ok(added)
    }

    /// Withdraw a like
    ///
    /// Returns `true` if the user had liked the playlist.
    pub fn unlike<'a>(&mut self, user_id: impl Into<Option<&'a str>>) -> Result<bool> {
        let user_id = require_user(user_id.into())?;
        let removed = self.liked_by.remove(&user_id);
        tracing::debug!("Unlike on playlist {} (removed: {})", self.id, removed);
        Ok(removed)
    }

    /// Number of distinct users who liked the playlist
    pub fn likes_count(&self) -> usize {
        self.liked_by.len()
    }

    /// Whether `user_id` currently likes the playlist
    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.liked_by.contains(user_id)
    }

    /// Copy of the set of users who liked the playlist
    pub fn liked_by_users(&self) -> HashSet<UserId> {
        self.liked_by.clone()
    }

    // ===== Comments =====

    /// Add a comment and return its id
    ///
    /// Empty text is allowed; absent text is not.
    pub fn add_comment<'a>(
        &mut self,
        user_id: impl Into<Option<&'a str>>,
        text: impl Into<Option<&'a str>>,
    ) -> Result<CommentId> {
        let user_id = require_user(user_id.into())?;
        let text = text
            .into()
            .ok_or_else(|| MixtapeError::invalid_argument("text invalid"))?;

        let comment_id = CommentId::new(self.id_generator.next_id());
        let comment = Comment::new(comment_id.clone(), user_id.clone(), text);

        self.comments.push(comment);
        self.comments_by_user
            .entry(user_id)
            .or_default()
            .push(comment_id.clone());

        tracing::debug!("Added comment {} to playlist {}", comment_id, self.id);
        Ok(comment_id)
    }

    /// Remove a comment by id
    ///
    /// Returns `true` if a comment was removed. When it was the author's last
    /// comment, the author disappears from the per-user index.
    pub fn remove_comment<'a>(
        &mut self,
        comment_id: impl Into<Option<&'a CommentId>>,
    ) -> bool {
        let Some(comment_id) = comment_id.into() else {
            return false;
        };
        let Some(index) = self.comments.iter().position(|c| c.id() == comment_id) else {
            return false;
        };

        let comment = self.comments.remove(index);
        if let Entry::Occupied(mut entry) = self.comments_by_user.entry(comment.user_id().clone())
        {
            entry.get_mut().retain(|id| id != comment_id);
            if entry.get().is_empty() {
                entry.remove();
            }
        }

        tracing::debug!("Removed comment {} from playlist {}", comment_id, self.id);
        true
    }

    /// All comments in the order they were added
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Number of comments
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Look up a comment by id
    pub fn comment(&self, comment_id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id() == comment_id)
    }

    /// Comments written by `user_id`, oldest first
    ///
    /// `None` means the user has no comments on this playlist; an empty
    /// vector is never returned.
    pub fn comments_by(&self, user_id: &str) -> Option<Vec<&Comment>> {
        let ids = self.comments_by_user.get(user_id)?;
        Some(ids.iter().filter_map(|id| self.comment(id)).collect())
    }

    /// Users with at least one comment, sorted
    pub fn commenters(&self) -> Vec<UserId> {
        let mut users: Vec<UserId> = self.comments_by_user.keys().cloned().collect();
        users.sort();
        users
    }
}

impl<S: fmt::Debug> fmt::Debug for Playlist<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Playlist")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("created_at", &self.created_at)
            .field("songs", &self.songs)
            .field("liked_by", &self.liked_by)
            .field("comments", &self.comments)
            .finish_non_exhaustive()
    }
}

fn require_user(user_id: Option<&str>) -> Result<UserId> {
    match user_id {
        Some(user_id) if !user_id.is_empty() => Ok(UserId::new(user_id)),
        _ => Err(MixtapeError::invalid_argument("userId invalid")),
    }
}
