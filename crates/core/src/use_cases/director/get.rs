use std::sync::Arc;

use crate::dto::DirectorDto;
use crate::error::RepoError;
use crate::mappers::director::director_to_dto;
use crate::repositories::DirectorRepository;
use crate::types::EntityId;

pub struct GetDirector {
    directors: Arc<dyn DirectorRepository>,
}

impl GetDirector {
    pub fn new(directors: Arc<dyn DirectorRepository>) -> Self {
        Self { directors }
    }

    pub async fn execute(&self, id: EntityId) -> Result<Option<DirectorDto>, RepoError> {
        let director = self.directors.find_by_id(id).await.inspect_err(|err| {
            tracing::error!(director_id = %id, error = %err, "get director failed");
        })?;
        Ok(director.as_ref().map(director_to_dto))
    }
}
