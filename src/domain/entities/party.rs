//! Viewing party entity and repository trait.
//!
//! Maps to the `parties` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a scheduled movie-viewing party.
///
/// Maps to the `parties` table:
/// - id: BIGINT PRIMARY KEY
/// - movie_title: VARCHAR(255) NOT NULL
/// - external_movie_id: VARCHAR(64) NOT NULL -- catalog reference, not a FK
/// - duration: INTEGER NULL (minutes; presence enforced at the application layer)
/// - starts_at: TIMESTAMPTZ NULL (presence enforced at the application layer)
/// - host_id: BIGINT NOT NULL REFERENCES users(id)
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// `duration` and `starts_at` are nullable columns so a candidate record can
/// be constructed incomplete and validated; a persisted party has passed the
/// full rule set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    /// Primary key (0 until assigned by the persistence collaborator)
    pub id: i64,

    /// Title of the movie being watched
    pub movie_title: String,

    /// Identifier of the movie in the external catalog
    pub external_movie_id: String,

    /// Planned length of the party in minutes
    pub duration: Option<i64>,

    /// Scheduled start instant
    pub starts_at: Option<DateTime<Utc>>,

    /// User who created the party (exactly one host, never reassigned)
    pub host_id: i64,

    /// When the party record was created
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Party {
    /// Build a candidate party for the given host.
    ///
    /// The id stays 0 until the repository assigns one at creation.
    pub fn new(
        host_id: i64,
        movie_title: impl Into<String>,
        external_movie_id: impl Into<String>,
        duration: Option<i64>,
        starts_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            movie_title: movie_title.into(),
            external_movie_id: external_movie_id.into(),
            duration,
            starts_at,
            host_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Format the start date as `MM/DD/YYYY`; `None` when unscheduled.
    pub fn starts_at_date(&self) -> Option<String> {
        self.starts_at.map(|t| t.format("%m/%d/%Y").to_string())
    }

    /// Format the start time as 24-hour `HH:MM`; `None` when unscheduled.
    pub fn starts_at_time(&self) -> Option<String> {
        self.starts_at.map(|t| t.format("%H:%M").to_string())
    }

    /// Human-readable party length, e.g. "1 hr 21 min".
    pub fn duration_display(&self) -> Option<String> {
        self.duration.map(|minutes| {
            let hours = minutes / 60;
            let remainder = minutes % 60;
            match (hours, remainder) {
                (0, m) => format!("{} min", m),
                (h, 0) => format!("{} hr", h),
                (h, m) => format!("{} hr {} min", h, m),
            }
        })
    }

    /// Whether the party starts strictly after the given instant.
    ///
    /// False when the start time is unset or has already been reached.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.starts_at.map_or(false, |t| t > now)
    }
}

impl Default for Party {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            movie_title: String::new(),
            external_movie_id: String::new(),
            duration: None,
            starts_at: None,
            host_id: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Repository trait for Party data access operations.
///
/// Implementations handle the actual storage interactions. The trait is
/// defined in the domain layer to maintain dependency inversion. The party
/// exclusively owns its invitations: `create` persists them together with
/// the party, and `delete` removes them in the same transaction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PartyRepository: Send + Sync {
    /// Find a party by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Party>, AppError>;

    /// Find all parties hosted by a user, newest start first.
    async fn find_by_host_id(&self, host_id: i64) -> Result<Vec<Party>, AppError>;

    /// Persist a candidate party and one invitation per invitee, atomically.
    ///
    /// Assigns the party id and returns the stored record.
    async fn create(&self, party: &Party, invitee_ids: &[i64]) -> Result<Party, AppError>;

    /// Update an existing party.
    async fn update(&self, party: &Party) -> Result<Party, AppError>;

    /// Delete a party and every invitation it owns (cascade).
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
