//! Party Service
//!
//! Handles viewing party operations: candidate validation, creation,
//! dashboard queries, rescheduling, and destruction.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use crate::application::dto::{CreatePartyRequest, ReschedulePartyRequest};
use crate::domain::entities::{
    FriendSource, InvitationRepository, MovieCatalog, Party, PartyRepository, User,
    UserRepository,
};
use crate::domain::services::ScheduleService;
use crate::shared::clock::Clock;
use crate::shared::error::ValidationReport;
use crate::shared::validation::report_from;

/// Party service trait defining viewing party operations.
#[async_trait]
pub trait PartyService: Send + Sync {
    /// Validate and persist a new party for the given host.
    ///
    /// Nothing is persisted unless every rule passes; failures come back as
    /// [`PartyError::Validation`] carrying the full report.
    async fn create_party(
        &self,
        host_id: i64,
        request: CreatePartyRequest,
    ) -> Result<PartyDto, PartyError>;

    /// Get a party with its invitees.
    async fn get_party(&self, party_id: i64) -> Result<PartyDto, PartyError>;

    /// Parties the user hosts (dashboard "hosting" section).
    async fn hosted_by(&self, user_id: i64) -> Result<Vec<PartyDto>, PartyError>;

    /// Parties the user has been invited to.
    async fn invited_to(&self, user_id: i64) -> Result<Vec<PartyDto>, PartyError>;

    /// Change a party's start time and/or duration, re-validating against
    /// the current clock. Host only.
    async fn reschedule_party(
        &self,
        party_id: i64,
        host_id: i64,
        request: ReschedulePartyRequest,
    ) -> Result<PartyDto, PartyError>;

    /// Delete a party and all of its invitations. Host only.
    async fn destroy_party(&self, party_id: i64, host_id: i64) -> Result<(), PartyError>;
}

/// Invited user as shown on a party.
#[derive(Debug, Clone, serde::Serialize)]
pub struct InviteeDto {
    /// Invited user id.
    pub user_id: String,
    /// Invited user's username.
    pub username: String,
}

/// Party data transfer object.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PartyDto {
    /// Party id.
    pub id: String,
    /// Movie being watched.
    pub movie_title: String,
    /// Catalog reference of the movie.
    pub external_movie_id: String,
    /// Length in minutes.
    pub duration: Option<i64>,
    /// Length as shown on the dashboard, e.g. "1 hr 21 min".
    pub duration_display: Option<String>,
    /// Start instant (RFC 3339).
    pub starts_at: Option<String>,
    /// Start date as `MM/DD/YYYY`.
    pub starts_at_date: Option<String>,
    /// Start time as 24-hour `HH:MM`.
    pub starts_at_time: Option<String>,
    /// Hosting user id.
    pub host_id: String,
    /// Invited users, in invitation order.
    pub invitees: Vec<InviteeDto>,
}

impl PartyDto {
    /// Create DTO from a party and its resolved invitees.
    pub fn from_party(party: Party, invitees: Vec<User>) -> Self {
        Self {
            id: party.id.to_string(),
            duration: party.duration,
            duration_display: party.duration_display(),
            starts_at: party.starts_at.map(|t| t.to_rfc3339()),
            starts_at_date: party.starts_at_date(),
            starts_at_time: party.starts_at_time(),
            host_id: party.host_id.to_string(),
            movie_title: party.movie_title,
            external_movie_id: party.external_movie_id,
            invitees: invitees
                .into_iter()
                .map(|user| InviteeDto {
                    user_id: user.id.to_string(),
                    username: user.username,
                })
                .collect(),
        }
    }
}

/// Party service errors.
#[derive(Debug, thiserror::Error)]
pub enum PartyError {
    #[error("Party not found")]
    NotFound,

    #[error("Only the host may modify a party")]
    Forbidden,

    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PartyError {
    /// The validation report, when this is a validation failure.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            PartyError::Validation(report) => Some(report),
            _ => None,
        }
    }
}

/// Party service implementation.
pub struct PartyServiceImpl<P, I, U, F, C, K>
where
    P: PartyRepository,
    I: InvitationRepository,
    U: UserRepository,
    F: FriendSource,
    C: MovieCatalog,
    K: Clock,
{
    party_repo: Arc<P>,
    invitation_repo: Arc<I>,
    user_repo: Arc<U>,
    friend_source: Arc<F>,
    movie_catalog: Arc<C>,
    clock: Arc<K>,
}

impl<P, I, U, F, C, K> PartyServiceImpl<P, I, U, F, C, K>
where
    P: PartyRepository,
    I: InvitationRepository,
    U: UserRepository,
    F: FriendSource,
    C: MovieCatalog,
    K: Clock,
{
    /// Create a new PartyServiceImpl.
    pub fn new(
        party_repo: Arc<P>,
        invitation_repo: Arc<I>,
        user_repo: Arc<U>,
        friend_source: Arc<F>,
        movie_catalog: Arc<C>,
        clock: Arc<K>,
    ) -> Self {
        Self {
            party_repo,
            invitation_repo,
            user_repo,
            friend_source,
            movie_catalog,
            clock,
        }
    }

    /// Reduce the host's selection to unique, actual friends, keeping the
    /// selection order. Non-friends cannot be invited.
    fn selected_invitees(selection: &[i64], friends: &[User]) -> Vec<i64> {
        let friend_ids: HashSet<i64> = friends.iter().map(|f| f.id).collect();
        let mut seen = HashSet::new();
        selection
            .iter()
            .copied()
            .filter(|id| friend_ids.contains(id) && seen.insert(*id))
            .collect()
    }

    /// Runtime of the referenced movie, when the catalog knows it.
    ///
    /// A blank reference is the presence check's concern and is never sent
    /// to the catalog.
    async fn movie_runtime(&self, external_movie_id: &str) -> Result<Option<i64>, PartyError> {
        if external_movie_id.trim().is_empty() {
            return Ok(None);
        }
        let movie = self
            .movie_catalog
            .find_by_external_id(external_movie_id)
            .await
            .map_err(|e| PartyError::Internal(e.to_string()))?;
        Ok(movie.map(|m| m.runtime_minutes))
    }

    /// Assemble the DTO for a stored party, resolving its invitees.
    async fn to_dto(&self, party: Party) -> Result<PartyDto, PartyError> {
        let invitations = self
            .invitation_repo
            .find_by_party_id(party.id)
            .await
            .map_err(|e| PartyError::Internal(e.to_string()))?;

        let invitee_ids: Vec<i64> = invitations.iter().map(|i| i.user_id).collect();
        let users = self
            .user_repo
            .find_by_ids(&invitee_ids)
            .await
            .map_err(|e| PartyError::Internal(e.to_string()))?;

        // Keep invitation order regardless of how the repository returns
        // the batch.
        let mut invitees = Vec::with_capacity(invitee_ids.len());
        for id in &invitee_ids {
            if let Some(user) = users.iter().find(|u| u.id == *id) {
                invitees.push(user.clone());
            }
        }

        Ok(PartyDto::from_party(party, invitees))
    }
}

#[async_trait]
impl<P, I, U, F, C, K> PartyService for PartyServiceImpl<P, I, U, F, C, K>
where
    P: PartyRepository + 'static,
    I: InvitationRepository + 'static,
    U: UserRepository + 'static,
    F: FriendSource + 'static,
    C: MovieCatalog + 'static,
    K: Clock + 'static,
{
    async fn create_party(
        &self,
        host_id: i64,
        request: CreatePartyRequest,
    ) -> Result<PartyDto, PartyError> {
        // Presence rules from the DTO derives.
        let mut report = match request.validate() {
            Ok(()) => ValidationReport::new(),
            Err(errors) => report_from(errors),
        };

        // Business rules, against "now" as of this validation.
        let now = self.clock.now();
        if let Some(error) = ScheduleService::check_future_start(request.starts_at, now) {
            report.push(error);
        }

        let friends = self
            .friend_source
            .friends_of(host_id)
            .await
            .map_err(|e| PartyError::Internal(e.to_string()))?;
        let invitee_ids = Self::selected_invitees(&request.friend_ids, &friends);
        if let Some(error) = ScheduleService::check_invitee_selection(invitee_ids.len()) {
            report.push(error);
        }

        let runtime = self.movie_runtime(&request.external_movie_id).await?;
        if let Some(error) =
            ScheduleService::check_duration_covers_runtime(request.duration, runtime)
        {
            report.push(error);
        }

        if !report.is_empty() {
            tracing::debug!(host_id, failures = report.len(), "rejected party candidate");
            return Err(PartyError::Validation(report));
        }

        let candidate = Party::new(
            host_id,
            request.movie_title,
            request.external_movie_id,
            request.duration,
            request.starts_at,
            now,
        );

        let created = self
            .party_repo
            .create(&candidate, &invitee_ids)
            .await
            .map_err(|e| PartyError::Internal(e.to_string()))?;

        tracing::info!(
            party_id = created.id,
            host_id,
            invitees = invitee_ids.len(),
            "created viewing party"
        );

        self.to_dto(created).await
    }

    async fn get_party(&self, party_id: i64) -> Result<PartyDto, PartyError> {
        let party = self
            .party_repo
            .find_by_id(party_id)
            .await
            .map_err(|e| PartyError::Internal(e.to_string()))?
            .ok_or(PartyError::NotFound)?;

        self.to_dto(party).await
    }

    async fn hosted_by(&self, user_id: i64) -> Result<Vec<PartyDto>, PartyError> {
        let parties = self
            .party_repo
            .find_by_host_id(user_id)
            .await
            .map_err(|e| PartyError::Internal(e.to_string()))?;

        let mut dtos = Vec::with_capacity(parties.len());
        for party in parties {
            dtos.push(self.to_dto(party).await?);
        }
        Ok(dtos)
    }

    async fn invited_to(&self, user_id: i64) -> Result<Vec<PartyDto>, PartyError> {
        let invitations = self
            .invitation_repo
            .find_by_user_id(user_id)
            .await
            .map_err(|e| PartyError::Internal(e.to_string()))?;

        let mut dtos = Vec::with_capacity(invitations.len());
        for invitation in invitations {
            // A dangling invitation (party just destroyed) is skipped, not
            // an error for the whole dashboard.
            let party = self
                .party_repo
                .find_by_id(invitation.party_id)
                .await
                .map_err(|e| PartyError::Internal(e.to_string()))?;
            if let Some(party) = party {
                dtos.push(self.to_dto(party).await?);
            }
        }
        Ok(dtos)
    }

    async fn reschedule_party(
        &self,
        party_id: i64,
        host_id: i64,
        request: ReschedulePartyRequest,
    ) -> Result<PartyDto, PartyError> {
        let mut party = self
            .party_repo
            .find_by_id(party_id)
            .await
            .map_err(|e| PartyError::Internal(e.to_string()))?
            .ok_or(PartyError::NotFound)?;

        if party.host_id != host_id {
            return Err(PartyError::Forbidden);
        }

        if let Some(starts_at) = request.starts_at {
            party.starts_at = Some(starts_at);
        }
        if let Some(duration) = request.duration {
            party.duration = Some(duration);
        }

        // The record is re-validated wholesale: an untouched start time
        // that has meanwhile slipped into the past fails here too.
        let now = self.clock.now();
        let mut report = ValidationReport::new();
        if let Some(error) = ScheduleService::check_future_start(party.starts_at, now) {
            report.push(error);
        }
        let runtime = self.movie_runtime(&party.external_movie_id).await?;
        if let Some(error) =
            ScheduleService::check_duration_covers_runtime(party.duration, runtime)
        {
            report.push(error);
        }
        if !report.is_empty() {
            return Err(PartyError::Validation(report));
        }

        party.updated_at = now;
        let updated = self
            .party_repo
            .update(&party)
            .await
            .map_err(|e| PartyError::Internal(e.to_string()))?;

        tracing::info!(party_id, host_id, "rescheduled viewing party");

        self.to_dto(updated).await
    }

    async fn destroy_party(&self, party_id: i64, host_id: i64) -> Result<(), PartyError> {
        let party = self
            .party_repo
            .find_by_id(party_id)
            .await
            .map_err(|e| PartyError::Internal(e.to_string()))?
            .ok_or(PartyError::NotFound)?;

        if party.host_id != host_id {
            return Err(PartyError::Forbidden);
        }

        // The repository contract removes the owned invitations in the
        // same transaction.
        self.party_repo
            .delete(party_id)
            .await
            .map_err(|e| PartyError::Internal(e.to_string()))?;

        tracing::info!(party_id, host_id, "destroyed viewing party");

        Ok(())
    }
}
