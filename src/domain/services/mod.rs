//! # Domain Services
//!
//! Domain services encapsulate business logic that doesn't naturally belong
//! to a single entity, plus the outbound ports the application layer drives.
//!
//! ## Services
//!
//! - **ScheduleService**: Party scheduling rules (future start, invitee
//!   selection, duration vs movie runtime)
//! - **Mailer**: Outbound port for invitation delivery

mod mailer;
mod scheduling;

pub use mailer::Mailer;
pub use scheduling::{
    ScheduleService, DURATION_BELOW_RUNTIME_MESSAGE, FUTURE_START_FIELD, FUTURE_START_MESSAGE,
    NEEDS_FRIENDS_MESSAGE,
};

#[cfg(test)]
pub use mailer::MockMailer;
