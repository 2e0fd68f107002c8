//! Repository for the `directors` table.

use async_trait::async_trait;
use catalog_core::entities::{Director, NewDirector};
use catalog_core::error::RepoError;
use catalog_core::repositories::DirectorRepository;
use catalog_core::types::{new_entity_id, EntityId};

use crate::error::repo_error;
use crate::models::DirectorRow;
use crate::DbPool;

/// Column list for `directors` queries.
const COLUMNS: &str = "id, first_name, second_name, birth_date, bio, created_at, updated_at";

pub struct PgDirectorRepository {
    pool: DbPool,
}

impl PgDirectorRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DirectorRepository for PgDirectorRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Director>, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM directors WHERE id = $1");
        match sqlx::query_as::<_, DirectorRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
        {
            Ok(row) => Ok(row.map(Director::from)),
            Err(err) => {
                tracing::error!(director_id = %id, error = %err, "find director failed");
                Ok(None)
            }
        }
    }

    async fn create(&self, director: &NewDirector) -> Result<Director, RepoError> {
        let query = format!(
            "INSERT INTO directors (id, first_name, second_name, birth_date, bio) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DirectorRow>(&query)
            .bind(new_entity_id())
            .bind(&director.first_name)
            .bind(&director.second_name)
            .bind(director.birth_date)
            .bind(&director.bio)
            .fetch_one(&self.pool)
            .await
            .map(Director::from)
            .map_err(repo_error)
    }

    async fn delete(&self, id: EntityId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM directors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repo_error)?;
        Ok(result.rows_affected() > 0)
    }
}
