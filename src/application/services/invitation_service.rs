//! Invitation Service
//!
//! Fans invitation email out to a party's invitees, one synchronous
//! delivery per invitation, with per-recipient outcome tracking so a
//! single failing delivery never silently drops the rest of the batch.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{
    InvitationRepository, Party, PartyRepository, User, UserRepository,
};
use crate::domain::services::Mailer;
use crate::shared::error::AppError;

/// Invitation service trait defining dispatch operations.
#[async_trait]
pub trait InvitationService: Send + Sync {
    /// Send one invitation email per invitee of the party.
    ///
    /// Deliveries run sequentially in invitation order. Failures are
    /// recorded in the summary and logged; subsequent deliveries still go
    /// out.
    async fn send_invitations(&self, party_id: i64)
        -> Result<DispatchSummaryDto, InvitationError>;
}

/// Outcome of one attempted delivery.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DeliveryDto {
    /// Invited user the delivery was addressed to.
    pub user_id: String,
    /// Whether the mailer accepted the message.
    pub delivered: bool,
    /// Failure detail when it did not.
    pub error: Option<String>,
}

/// Summary of an invitation fan-out.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DispatchSummaryDto {
    /// Party the invitations belong to.
    pub party_id: String,
    /// Number of deliveries attempted.
    pub attempted: usize,
    /// Number of deliveries the mailer accepted.
    pub delivered: usize,
    /// Per-recipient outcomes, in invitation order.
    pub deliveries: Vec<DeliveryDto>,
}

impl DispatchSummaryDto {
    /// Whether every attempted delivery was accepted.
    pub fn is_complete(&self) -> bool {
        self.delivered == self.attempted
    }
}

/// Invitation service errors.
#[derive(Debug, thiserror::Error)]
pub enum InvitationError {
    #[error("Party not found")]
    PartyNotFound,

    #[error("Host user not found")]
    HostNotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Invitation service implementation.
pub struct InvitationServiceImpl<P, I, U, M>
where
    P: PartyRepository,
    I: InvitationRepository,
    U: UserRepository,
    M: Mailer,
{
    party_repo: Arc<P>,
    invitation_repo: Arc<I>,
    user_repo: Arc<U>,
    mailer: Arc<M>,
}

impl<P, I, U, M> InvitationServiceImpl<P, I, U, M>
where
    P: PartyRepository,
    I: InvitationRepository,
    U: UserRepository,
    M: Mailer,
{
    /// Create a new InvitationServiceImpl.
    pub fn new(party_repo: Arc<P>, invitation_repo: Arc<I>, user_repo: Arc<U>, mailer: Arc<M>) -> Self {
        Self {
            party_repo,
            invitation_repo,
            user_repo,
            mailer,
        }
    }

    /// Resolve one invitee and hand the invite to the mailer.
    async fn deliver(&self, host: &User, party: &Party, user_id: i64) -> Result<(), AppError> {
        let friend = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {} no longer exists", user_id)))?;

        self.mailer.invite(host, &friend, party).await
    }
}

#[async_trait]
impl<P, I, U, M> InvitationService for InvitationServiceImpl<P, I, U, M>
where
    P: PartyRepository + 'static,
    I: InvitationRepository + 'static,
    U: UserRepository + 'static,
    M: Mailer + 'static,
{
    async fn send_invitations(
        &self,
        party_id: i64,
    ) -> Result<DispatchSummaryDto, InvitationError> {
        let party = self
            .party_repo
            .find_by_id(party_id)
            .await
            .map_err(|e| InvitationError::Internal(e.to_string()))?
            .ok_or(InvitationError::PartyNotFound)?;

        let host = self
            .user_repo
            .find_by_id(party.host_id)
            .await
            .map_err(|e| InvitationError::Internal(e.to_string()))?
            .ok_or(InvitationError::HostNotFound)?;

        let invitations = self
            .invitation_repo
            .find_by_party_id(party_id)
            .await
            .map_err(|e| InvitationError::Internal(e.to_string()))?;

        let mut deliveries = Vec::with_capacity(invitations.len());
        for invitation in &invitations {
            match self.deliver(&host, &party, invitation.user_id).await {
                Ok(()) => {
                    tracing::debug!(
                        party_id,
                        user_id = invitation.user_id,
                        "invitation delivered"
                    );
                    deliveries.push(DeliveryDto {
                        user_id: invitation.user_id.to_string(),
                        delivered: true,
                        error: None,
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        party_id,
                        user_id = invitation.user_id,
                        error = %e,
                        "invitation delivery failed"
                    );
                    deliveries.push(DeliveryDto {
                        user_id: invitation.user_id.to_string(),
                        delivered: false,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        let delivered = deliveries.iter().filter(|d| d.delivered).count();
        tracing::info!(
            party_id,
            attempted = deliveries.len(),
            delivered,
            "dispatched invitations"
        );

        Ok(DispatchSummaryDto {
            party_id: party_id.to_string(),
            attempted: deliveries.len(),
            delivered,
            deliveries,
        })
    }
}
