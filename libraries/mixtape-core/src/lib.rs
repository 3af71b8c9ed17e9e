//! Mixtape Core
//!
//! In-memory playlist management: an ordered list of songs, the set of users
//! who liked the playlist, and a comment log indexed per user.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Playlist`, `Comment`, `Track` and the ids
//! - **Core Traits**: `Song` (what a playlist needs from a song) and
//!   `IdGenerator` (where ids come from)
//! - **Error Handling**: Unified `MixtapeError` and `Result` types
//! - **Sharing**: `SharedPlaylist`, a mutex-guarded handle for multi-threaded
//!   callers
//!
//! # Example
//!
//! ```rust
//! use mixtape_core::{Playlist, Track};
//! use std::sync::Arc;
//!
//! let mut playlist = Playlist::<Track>::new("Road Trip");
//! playlist.add_song(Arc::new(Track::new("Highway Star", "Deep Purple", 180)));
//! playlist.add_song(Arc::new(Track::new("Born to Run", "Bruce Springsteen", 200)));
//!
//! assert_eq!(playlist.total_duration_secs(), 380);
//! assert_eq!(playlist.search("purple").len(), 1);
//!
//! playlist.like("alice").unwrap();
//! let comment = playlist.add_comment("alice", "great for driving").unwrap();
//! assert!(playlist.remove_comment(&comment));
//! assert!(playlist.comments_by("alice").is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod id_generator;
pub mod playlist;
pub mod shared;
pub mod types;

// Re-export commonly used types
pub use error::{MixtapeError, Result};
pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use playlist::{Playlist, PlaylistSummary};
pub use shared::SharedPlaylist;

// Export all types
pub use types::{Comment, CommentId, PlaylistId, Song, Track, UserId};
