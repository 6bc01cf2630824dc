//! # Domain Layer
//!
//! The domain layer contains the core business logic of the watch-party
//! service. It is independent of any external frameworks or infrastructure
//! concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (Party, Invitation, User, Movie)
//! - **services**: Domain services and outbound ports
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure layers
//! - Pure business logic and domain rules
//! - Collaborator traits define data access and delivery contracts
//! - Entities encapsulate domain behavior

pub mod entities;
pub mod services;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
