//! Infrastructure Layer
//!
//! Contains implementations of the domain's collaborator traits:
//! - In-memory repositories and catalog (tests, embedding, development)
//! - Logging mailer (development delivery)
//!
//! Database-backed persistence and real mail transport are provided by the
//! surrounding application against the same traits.

pub mod mailer;
pub mod memory;

pub use mailer::LogMailer;
pub use memory::{InMemoryDatabase, InMemoryMovieCatalog};
