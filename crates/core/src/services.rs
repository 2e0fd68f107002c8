//! Cross-entity checks shared by several use cases.

use std::sync::Arc;

use crate::error::RepoError;
use crate::repositories::DirectorRepository;
use crate::types::EntityId;

/// Verifies that a movie's director reference resolves.
///
/// The check and the subsequent write are not atomic; the foreign key on
/// `movies.director_id` catches the race.
#[derive(Clone)]
pub struct DirectorCheck {
    directors: Arc<dyn DirectorRepository>,
}

impl DirectorCheck {
    pub fn new(directors: Arc<dyn DirectorRepository>) -> Self {
        Self { directors }
    }

    pub async fn exists(&self, id: EntityId) -> Result<bool, RepoError> {
        Ok(self.directors.find_by_id(id).await?.is_some())
    }
}
