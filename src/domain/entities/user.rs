//! User entity, repository trait, and friend-graph read port.
//!
//! Maps to the `users` table in the database schema. Credentials and
//! session data stay with the authentication layer that owns them; this
//! projection carries what party scheduling and invitation delivery need.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a user account.
///
/// Maps to the `users` table:
/// - id: BIGINT PRIMARY KEY
/// - username: VARCHAR(32) NOT NULL UNIQUE
/// - email: VARCHAR(255) NOT NULL UNIQUE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Primary key
    pub id: i64,

    /// Username (unique)
    pub username: String,

    /// Email address (unique), the invitation delivery target
    pub email: String,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: 0,
            username: String::new(),
            email: String::new(),
            created_at: Utc::now(),
        }
    }
}

/// Repository trait for User data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Resolve a batch of user ids; unknown ids are simply absent from the
    /// result.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, AppError>;
}

/// Read port over the friend graph.
///
/// Friendship management lives elsewhere; party creation only needs the
/// candidate list of users a host may invite.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FriendSource: Send + Sync {
    /// All users the given user has befriended.
    async fn friends_of(&self, user_id: i64) -> Result<Vec<User>, AppError>;
}
