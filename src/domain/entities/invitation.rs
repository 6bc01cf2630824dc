//! Invitation entity and repository trait.
//!
//! Maps to the `invitations` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Join record linking a party to an invited user.
///
/// Maps to the `invitations` table:
/// - id: BIGINT PRIMARY KEY
/// - party_id: BIGINT NOT NULL REFERENCES parties(id) ON DELETE CASCADE
/// - user_id: BIGINT NOT NULL REFERENCES users(id)
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// Invitations are created alongside their party and live exactly as long
/// as it does; they are never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invitation {
    /// Primary key
    pub id: i64,

    /// Party this invitation belongs to
    pub party_id: i64,

    /// Invited user
    pub user_id: i64,

    /// When the invitation was created
    pub created_at: DateTime<Utc>,
}

/// Repository trait for Invitation data access operations.
///
/// Creation and deletion go through [`super::PartyRepository`], which owns
/// the invitation lifecycle; this trait covers the read side.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvitationRepository: Send + Sync {
    /// Find all invitations for a party, in creation order.
    async fn find_by_party_id(&self, party_id: i64) -> Result<Vec<Invitation>, AppError>;

    /// Find all invitations addressed to a user.
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Invitation>, AppError>;
}
