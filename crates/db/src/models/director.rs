use catalog_core::entities::Director;
use catalog_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

/// A row from the `directors` table.
#[derive(Debug, Clone, FromRow)]
pub struct DirectorRow {
    pub id: EntityId,
    pub first_name: String,
    pub second_name: String,
    pub birth_date: Timestamp,
    pub bio: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<DirectorRow> for Director {
    fn from(row: DirectorRow) -> Self {
        Director {
            id: row.id,
            first_name: row.first_name,
            second_name: row.second_name,
            birth_date: row.birth_date,
            bio: row.bio,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
