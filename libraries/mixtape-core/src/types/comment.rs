//! Comment domain type
use super::ids::{CommentId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A timestamped note left on a playlist by a user
///
/// Comments are only created through `Playlist::add_comment`; every field is
/// fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    user_id: UserId,
    text: String,
    created_at: DateTime<Utc>,
}

impl Comment {
    pub(crate) fn new(id: CommentId, user_id: UserId, text: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Unique comment identifier
    pub fn id(&self) -> &CommentId {
        &self.id
    }

    /// Author of the comment
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Comment body (may be empty)
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
