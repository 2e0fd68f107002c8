use std::sync::Arc;

use crate::error::RepoError;
use crate::repositories::DirectorRepository;
use crate::types::EntityId;

/// Deletes a director. Fails with [`RepoError::Conflict`] while movies
/// still reference it.
pub struct DeleteDirector {
    directors: Arc<dyn DirectorRepository>,
}

impl DeleteDirector {
    pub fn new(directors: Arc<dyn DirectorRepository>) -> Self {
        Self { directors }
    }

    pub async fn execute(&self, id: EntityId) -> Result<bool, RepoError> {
        self.directors.delete(id).await.inspect_err(|err| {
            tracing::error!(director_id = %id, error = %err, "delete director failed");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockDirectorRepository;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn forwards_result() {
        let mut directors = MockDirectorRepository::new();
        directors.expect_delete().returning(|_| Ok(false));
        let use_case = DeleteDirector::new(Arc::new(directors));
        assert!(!use_case.execute(uuid::Uuid::now_v7()).await.unwrap());
    }

    #[tokio::test]
    async fn referenced_director_conflicts() {
        let mut directors = MockDirectorRepository::new();
        directors.expect_delete().returning(|_| {
            Err(RepoError::Conflict {
                constraint: "fk_movies_director".into(),
                message: "still referenced".into(),
            })
        });
        let use_case = DeleteDirector::new(Arc::new(directors));
        assert_matches!(
            use_case.execute(uuid::Uuid::now_v7()).await,
            Err(RepoError::Conflict { .. })
        );
    }
}
