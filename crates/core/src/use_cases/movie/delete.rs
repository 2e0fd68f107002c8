use std::sync::Arc;

use crate::error::RepoError;
use crate::repositories::MovieRepository;
use crate::types::EntityId;

pub struct DeleteMovie {
    movies: Arc<dyn MovieRepository>,
}

impl DeleteMovie {
    pub fn new(movies: Arc<dyn MovieRepository>) -> Self {
        Self { movies }
    }

    /// `false` when nothing was deleted.
    pub async fn execute(&self, id: EntityId) -> Result<bool, RepoError> {
        self.movies.delete(id).await.inspect_err(|err| {
            tracing::error!(movie_id = %id, error = %err, "delete movie failed");
        })
    }
}
