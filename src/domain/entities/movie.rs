//! Movie projection and external catalog port.
//!
//! Movies are not stored by this service; the catalog (an external movie
//! database API in production) is consulted at validation time for the
//! runtime the duration rule compares against.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Catalog projection of a movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// Identifier in the external catalog
    pub external_id: String,

    /// Movie title
    pub title: String,

    /// Runtime in minutes
    pub runtime_minutes: i64,
}

/// Read port over the external movie catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Look up a movie by its external id.
    ///
    /// Returns `None` when the catalog does not know the id; party
    /// validation treats that as "runtime unknown" rather than an error.
    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<Movie>, AppError>;
}
