//! # Domain Entities
//!
//! Core domain entities of the watch-party service. Persisted entities map
//! directly to their corresponding database tables; `Movie` is a projection
//! of the external catalog.
//!
//! ## Core Entities
//!
//! - **Party**: A scheduled movie-viewing event with a host and invitees
//! - **Invitation**: A user's invitation to a specific party
//! - **User**: The account projection scheduling and delivery need
//!
//! ## Collaborator Traits
//!
//! Each entity has an associated trait defining data access operations,
//! implemented by the surrounding infrastructure (dependency inversion).
//! Two further read ports cover data this service consumes but does not
//! own: the friend graph (`FriendSource`) and the external movie catalog
//! (`MovieCatalog`).

mod invitation;
mod movie;
mod party;
mod user;

// Re-export Party entity and related types
pub use party::{Party, PartyRepository};

// Re-export Invitation entity and related types
pub use invitation::{Invitation, InvitationRepository};

// Re-export User entity, repository, and the friend-graph port
pub use user::{FriendSource, User, UserRepository};

// Re-export the movie projection and catalog port
pub use movie::{Movie, MovieCatalog};

#[cfg(test)]
pub use invitation::MockInvitationRepository;
#[cfg(test)]
pub use movie::MockMovieCatalog;
#[cfg(test)]
pub use party::MockPartyRepository;
#[cfg(test)]
pub use user::{MockFriendSource, MockUserRepository};
