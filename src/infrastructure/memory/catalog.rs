//! In-memory movie catalog.
//!
//! Stand-in for the external movie database API: a seeded map of catalog
//! ids to movie projections.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::entities::{Movie, MovieCatalog};
use crate::shared::error::AppError;

/// Catalog backed by seeded entries.
#[derive(Debug, Default)]
pub struct InMemoryMovieCatalog {
    movies: DashMap<String, Movie>,
}

impl InMemoryMovieCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            movies: DashMap::new(),
        }
    }

    /// Add or replace a catalog entry.
    pub fn seed(&self, movie: Movie) {
        self.movies.insert(movie.external_id.clone(), movie);
    }
}

#[async_trait]
impl MovieCatalog for InMemoryMovieCatalog {
    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<Movie>, AppError> {
        Ok(self.movies.get(external_id).map(|m| m.value().clone()))
    }
}
