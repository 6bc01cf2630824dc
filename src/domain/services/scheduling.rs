//! Scheduling rule domain service.
//!
//! Pure business rules for party scheduling. Each check returns the field
//! error it would attach, or `None` when the rule passes or cannot be
//! evaluated; callers collect the results into a
//! [`crate::shared::error::ValidationReport`]. The checks are independent
//! and composable: a rule whose input is absent stays silent so the
//! missing field is reported once, by the presence check.

use chrono::{DateTime, Utc};

use crate::shared::error::{FieldError, ValidationReport};

/// Message for a start time that is not strictly in the future.
pub const FUTURE_START_MESSAGE: &str = "Error: Party must be set for a future date";

/// Message for a party with no invited friends.
pub const NEEDS_FRIENDS_MESSAGE: &str = "Error: Party must need friends.";

/// Message for a duration shorter than the movie runtime.
pub const DURATION_BELOW_RUNTIME_MESSAGE: &str =
    "Error: Party duration must match or exceed movie runtime.";

/// Field key the future-start rule reports on.
pub const FUTURE_START_FIELD: &str = "date";

/// Domain service for party scheduling rules.
pub struct ScheduleService;

impl ScheduleService {
    /// A scheduled start must lie strictly after the current instant.
    ///
    /// `now` is read at validation time, never cached, so a record that
    /// once passed can fail on re-validation as the clock advances. An
    /// unset start is the presence check's concern and stays silent here.
    pub fn check_future_start(
        starts_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Option<FieldError> {
        match starts_at {
            Some(starts_at) if starts_at > now => None,
            Some(_) => Some(FieldError::new(FUTURE_START_FIELD, FUTURE_START_MESSAGE)),
            None => None,
        }
    }

    /// A party needs at least one invited friend.
    ///
    /// Counts the selection after it has been reduced to actual friends of
    /// the host; reported on the record itself rather than a field.
    pub fn check_invitee_selection(invitee_count: usize) -> Option<FieldError> {
        if invitee_count == 0 {
            Some(FieldError::new(ValidationReport::BASE, NEEDS_FRIENDS_MESSAGE))
        } else {
            None
        }
    }

    /// The party must run at least as long as the movie.
    ///
    /// Evaluated only when both sides are known: an absent duration is the
    /// presence check's concern, and an unknown runtime (catalog miss)
    /// leaves nothing to compare against.
    pub fn check_duration_covers_runtime(
        duration: Option<i64>,
        runtime_minutes: Option<i64>,
    ) -> Option<FieldError> {
        match (duration, runtime_minutes) {
            (Some(duration), Some(runtime)) if duration < runtime => {
                Some(FieldError::new("duration", DURATION_BELOW_RUNTIME_MESSAGE))
            }
            _ => None,
        }
    }
}
