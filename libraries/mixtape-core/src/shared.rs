//! Thread-safe playlist handle
//!
//! [`Playlist`] is a plain single-owner value. `SharedPlaylist` puts one mutex
//! around the whole entity so several threads can call the same operations;
//! each call runs under the lock from start to finish.

use crate::error::Result;
use crate::playlist::{Playlist, PlaylistSummary};
use crate::types::{CommentId, PlaylistId, Song, Track, UserId};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, lock-guarded handle to a [`Playlist`]
pub struct SharedPlaylist<S = Track> {
    inner: Arc<Mutex<Playlist<S>>>,
}

impl<S> Clone for SharedPlaylist<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Song> From<Playlist<S>> for SharedPlaylist<S> {
    fn from(playlist: Playlist<S>) -> Self {
        Self::new(playlist)
    }
}

impl<S: Song> SharedPlaylist<S> {
    /// Take ownership of `playlist` behind a new lock
    pub fn new(playlist: Playlist<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(playlist)),
        }
    }

    // Poisoning is ignored. Single operations validate before mutating, but a
    // `write` closure that panics midway leaves its earlier steps applied.
    fn lock(&self) -> MutexGuard<'_, Playlist<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with shared access to the playlist
    pub fn read<R>(&self, f: impl FnOnce(&Playlist<S>) -> R) -> R {
        let guard = self.lock();
        f(&*guard)
    }

    /// Run `f` with exclusive access, for multi-step updates that must not
    /// interleave with other callers
    ///
    /// Steps are not rolled back: if `f` panics, whatever it already changed
    /// stays visible to later callers.
    pub fn write<R>(&self, f: impl FnOnce(&mut Playlist<S>) -> R) -> R {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    /// See [`Playlist::id`]
    pub fn id(&self) -> PlaylistId {
        self.lock().id().clone()
    }

    /// See [`Playlist::name`]
    pub fn name(&self) -> String {
        self.lock().name().to_string()
    }

    /// See [`Playlist::len`]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// See [`Playlist::is_empty`]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// See [`Playlist::total_duration_secs`]
    pub fn total_duration_secs(&self) -> u64 {
        self.lock().total_duration_secs()
    }

    /// See [`Playlist::summary`]
    pub fn summary(&self) -> PlaylistSummary {
        self.lock().summary()
    }

    /// Copy of the current song sequence
    pub fn songs(&self) -> Vec<Arc<S>> {
        self.lock().songs().to_vec()
    }

    /// See [`Playlist::add_song`]
    pub fn add_song(&self, song: impl Into<Option<Arc<S>>>) {
        self.lock().add_song(song);
    }

    /// See [`Playlist::insert_song`]
    pub fn insert_song(&self, song: impl Into<Option<Arc<S>>>, pos: i64) {
        self.lock().insert_song(song, pos);
    }

    /// See [`Playlist::remove_song`]
    pub fn remove_song<'s>(&self, song: impl Into<Option<&'s S>>) -> bool
    where
        S: 's,
    {
        self.lock().remove_song(song)
    }

    /// See [`Playlist::clear`]
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// See [`Playlist::sort_songs`]
    pub fn sort_songs(&self) {
        self.lock().sort_songs();
    }

    /// See [`Playlist::search`]
    pub fn search<'a>(&self, keyword: impl Into<Option<&'a str>>) -> Vec<Arc<S>> {
        self.lock().search(keyword)
    }

    /// See [`Playlist::like`]
    pub fn like<'a>(&self, user_id: impl Into<Option<&'a str>>) -> Result<bool> {
        self.lock().like(user_id)
    }

    /// See [`Playlist::unlike`]
    pub fn unlike<'a>(&self, user_id: impl Into<Option<&'a str>>) -> Result<bool> {
        self.lock().unlike(user_id)
    }

    /// See [`Playlist::likes_count`]
    pub fn likes_count(&self) -> usize {
        self.lock().likes_count()
    }

    /// See [`Playlist::liked_by_users`]
    pub fn liked_by_users(&self) -> HashSet<UserId> {
        self.lock().liked_by_users()
    }

    /// See [`Playlist::add_comment`]
    pub fn add_comment<'a>(
        &self,
        user_id: impl Into<Option<&'a str>>,
        text: impl Into<Option<&'a str>>,
    ) -> Result<CommentId> {
        self.lock().add_comment(user_id, text)
    }

    /// See [`Playlist::remove_comment`]
    pub fn remove_comment<'a>(&self, comment_id: impl Into<Option<&'a CommentId>>) -> bool {
        self.lock().remove_comment(comment_id)
    }

    /// See [`Playlist::comment_count`]
    pub fn comment_count(&self) -> usize {
        self.lock().comment_count()
    }
}
