//! Value types shared by the playlist
mod comment;
mod ids;
mod song;

pub use comment::Comment;
pub use ids::{CommentId, PlaylistId, UserId};
pub use song::{Song, Track};
