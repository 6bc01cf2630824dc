//! In-memory data store.
//!
//! DashMap-backed implementation of the persistence collaborator traits,
//! used by the integration tests and by embedders that want the core
//! without a database. Ids come from one shared sequence, the way a
//! database sequence would hand them out.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::entities::{
    FriendSource, Invitation, InvitationRepository, Party, PartyRepository, User,
    UserRepository,
};
use crate::shared::error::AppError;

/// In-memory store implementing the repository traits and the friend-graph
/// read port.
#[derive(Debug)]
pub struct InMemoryDatabase {
    users: DashMap<i64, User>,
    parties: DashMap<i64, Party>,
    invitations: DashMap<i64, Invitation>,
    /// user id -> ids of users they have befriended
    friendships: DashMap<i64, Vec<i64>>,
    next_id: AtomicI64,
}

impl InMemoryDatabase {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            parties: DashMap::new(),
            invitations: DashMap::new(),
            friendships: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    fn assign_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Seed a user account; returns the stored record with its id.
    pub fn insert_user(&self, username: &str, email: &str) -> User {
        let user = User {
            id: self.assign_id(),
            username: username.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        self.users.insert(user.id, user.clone());
        user
    }

    /// Record that `user_id` has befriended `friend_id` (directed edge).
    pub fn befriend(&self, user_id: i64, friend_id: i64) {
        self.friendships.entry(user_id).or_default().push(friend_id);
    }

    /// Number of invitation records currently stored (test visibility).
    pub fn invitation_count(&self) -> usize {
        self.invitations.len()
    }

    /// Number of party records currently stored (test visibility).
    pub fn party_count(&self) -> usize {
        self.parties.len()
    }
}

#[async_trait]
impl PartyRepository for InMemoryDatabase {
    async fn find_by_id(&self, id: i64) -> Result<Option<Party>, AppError> {
        Ok(self.parties.get(&id).map(|p| p.value().clone()))
    }

    async fn find_by_host_id(&self, host_id: i64) -> Result<Vec<Party>, AppError> {
        let mut parties: Vec<Party> = self
            .parties
            .iter()
            .filter(|p| p.host_id == host_id)
            .map(|p| p.value().clone())
            .collect();
        // Newest start first, unscheduled candidates last.
        parties.sort_by(|a, b| b.starts_at.cmp(&a.starts_at));
        Ok(parties)
    }

    async fn create(&self, party: &Party, invitee_ids: &[i64]) -> Result<Party, AppError> {
        let mut stored = party.clone();
        stored.id = self.assign_id();
        self.parties.insert(stored.id, stored.clone());

        for user_id in invitee_ids {
            let invitation = Invitation {
                id: self.assign_id(),
                party_id: stored.id,
                user_id: *user_id,
                created_at: stored.created_at,
            };
            self.invitations.insert(invitation.id, invitation);
        }

        Ok(stored)
    }

    async fn update(&self, party: &Party) -> Result<Party, AppError> {
        if !self.parties.contains_key(&party.id) {
            return Err(AppError::NotFound(format!("party {}", party.id)));
        }
        self.parties.insert(party.id, party.clone());
        Ok(party.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.parties.remove(&id).is_none() {
            return Err(AppError::NotFound(format!("party {}", id)));
        }
        // Cascade: the party owns its invitations.
        self.invitations.retain(|_, invitation| invitation.party_id != id);
        Ok(())
    }
}

#[async_trait]
impl InvitationRepository for InMemoryDatabase {
    async fn find_by_party_id(&self, party_id: i64) -> Result<Vec<Invitation>, AppError> {
        let mut invitations: Vec<Invitation> = self
            .invitations
            .iter()
            .filter(|i| i.party_id == party_id)
            .map(|i| i.value().clone())
            .collect();
        invitations.sort_by_key(|i| i.id);
        Ok(invitations)
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Invitation>, AppError> {
        let mut invitations: Vec<Invitation> = self
            .invitations
            .iter()
            .filter(|i| i.user_id == user_id)
            .map(|i| i.value().clone())
            .collect();
        invitations.sort_by_key(|i| i.id);
        Ok(invitations)
    }
}

#[async_trait]
impl UserRepository for InMemoryDatabase {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, AppError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.users.get(id).map(|u| u.value().clone()))
            .collect())
    }
}

#[async_trait]
impl FriendSource for InMemoryDatabase {
    async fn friends_of(&self, user_id: i64) -> Result<Vec<User>, AppError> {
        let friend_ids = self
            .friendships
            .get(&user_id)
            .map(|ids| ids.value().clone())
            .unwrap_or_default();
        self.find_by_ids(&friend_ids).await
    }
}
