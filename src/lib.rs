//! # Watch Party Library
//!
//! This crate provides the core of a movie watch-party service:
//! - Scheduling validation for viewing parties (presence and business rules)
//! - Invitation fan-out with per-recipient delivery tracking
//! - Display formatting for party start dates and times
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core business entities and collaborator traits
//! - **Application Layer**: Business logic services and DTOs
//! - **Infrastructure Layer**: In-memory collaborator implementations
//!
//! Persistence, HTTP routing, authentication, and mail transport are owned
//! by the surrounding application; this crate consumes them through the
//! traits defined in the domain layer.
//!
//! ## Module Structure
//!
//! ```text
//! watch_party/
//! +-- config/        Configuration management
//! +-- domain/        Domain entities, scheduling rules, and traits
//! +-- application/   Application services and DTOs
//! +-- infrastructure/ In-memory repositories and the logging mailer
//! +-- shared/        Common utilities (errors, validation, clock)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - Collaborator implementations
pub mod infrastructure;

// Shared utilities
pub mod shared;

// Telemetry and observability
pub mod telemetry;
