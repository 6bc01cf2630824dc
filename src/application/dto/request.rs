//! Request DTOs
//!
//! Input structures accepted by the application services. Presence rules
//! are declared here with `validator` derives; the clock- and
//! collaborator-dependent business rules live in the domain scheduling
//! service.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::shared::validation::validate_not_blank;

/// Create viewing party request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePartyRequest {
    #[validate(custom(function = validate_not_blank, message = "can't be blank"))]
    pub movie_title: String,

    #[validate(custom(function = validate_not_blank, message = "can't be blank"))]
    pub external_movie_id: String,

    /// Planned length in minutes
    #[validate(required(message = "can't be blank"))]
    pub duration: Option<i64>,

    /// Scheduled start instant
    #[validate(required(message = "can't be blank"))]
    pub starts_at: Option<DateTime<Utc>>,

    /// Friends the host selected on the creation form
    #[serde(default)]
    pub friend_ids: Vec<i64>,
}

/// Reschedule party request
///
/// Only the supplied fields change; the record is re-validated against the
/// current clock either way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReschedulePartyRequest {
    /// New start instant (None keeps the current one)
    pub starts_at: Option<DateTime<Utc>>,

    /// New length in minutes (None keeps the current one)
    pub duration: Option<i64>,
}
