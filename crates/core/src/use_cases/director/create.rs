use std::sync::Arc;

use crate::dto::DirectorDto;
use crate::entities::NewDirector;
use crate::error::RepoError;
use crate::mappers::director::director_to_dto;
use crate::repositories::DirectorRepository;

pub struct CreateDirector {
    directors: Arc<dyn DirectorRepository>,
}

impl CreateDirector {
    pub fn new(directors: Arc<dyn DirectorRepository>) -> Self {
        Self { directors }
    }

    pub async fn execute(&self, director: NewDirector) -> Result<DirectorDto, RepoError> {
        let created = self.directors.create(&director).await.inspect_err(|err| {
            tracing::error!(
                first_name = %director.first_name,
                second_name = %director.second_name,
                error = %err,
                "create director failed"
            );
        })?;
        tracing::info!(director_id = %created.id, "director created");
        Ok(director_to_dto(&created))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockDirectorRepository;
    use crate::use_cases::fixtures;

    #[tokio::test]
    async fn returns_public_view() {
        let id = uuid::Uuid::now_v7();
        let mut directors = MockDirectorRepository::new();
        directors
            .expect_create()
            .times(1)
            .returning(move |_| Ok(fixtures::director(id)));

        let dto = CreateDirector::new(Arc::new(directors))
            .execute(fixtures::new_director())
            .await
            .unwrap();

        assert_eq!(dto.id, id);
        assert_eq!(dto.first_name.as_deref(), Some("Christopher"));
        assert_eq!(dto.second_name.as_deref(), Some("Nolan"));
    }

    #[tokio::test]
    async fn propagates_backend_error() {
        let mut directors = MockDirectorRepository::new();
        directors
            .expect_create()
            .returning(|_| Err(RepoError::Backend("pool timed out".into())));

        let result = CreateDirector::new(Arc::new(directors))
            .execute(fixtures::new_director())
            .await;
        assert!(matches!(result, Err(RepoError::Backend(_))));
    }
}
