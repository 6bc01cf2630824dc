//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **PartyService**: Viewing party validation, creation, dashboards,
//!   rescheduling, and destruction
//! - **InvitationService**: Invitation email fan-out with per-recipient
//!   outcome tracking

pub mod invitation_service;
pub mod party_service;

// Re-export party service types
pub use party_service::{InviteeDto, PartyDto, PartyError, PartyService, PartyServiceImpl};

// Re-export invitation service types
pub use invitation_service::{
    DeliveryDto, DispatchSummaryDto, InvitationError, InvitationService, InvitationServiceImpl,
};
