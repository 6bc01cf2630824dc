//! Data Transfer Objects
//!
//! Request DTOs for the application services. Response-shaped DTOs live
//! next to the service that produces them.

pub mod request;

pub use request::{CreatePartyRequest, ReschedulePartyRequest};
