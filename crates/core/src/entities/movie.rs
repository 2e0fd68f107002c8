use crate::entities::director::Director;
use crate::types::{EntityId, Timestamp};

/// Reference from a movie to its director.
///
/// Repositories only resolve the full director when asked to populate it.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectorRef {
    Id(EntityId),
    Populated(Director),
}

impl DirectorRef {
    pub fn id(&self) -> EntityId {
        match self {
            DirectorRef::Id(id) => *id,
            DirectorRef::Populated(director) => director.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub release_date: Timestamp,
    pub genre: String,
    /// 0 to 10 inclusive.
    pub rating: f64,
    pub imdb_id: String,
    pub director: DirectorRef,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a movie. `rating` is already defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub release_date: Timestamp,
    pub genre: String,
    pub rating: f64,
    pub imdb_id: String,
    pub director_id: EntityId,
}

/// Partial update for a movie. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<Timestamp>,
    pub genre: Option<String>,
    pub rating: Option<f64>,
    pub imdb_id: Option<String>,
    pub director_id: Option<EntityId>,
}

impl MovieChanges {
    pub fn is_empty(&self) -> bool {
        self == &MovieChanges::default()
    }
}

/// Fields a movie listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MovieSortField {
    Title,
    ReleaseDate,
    Rating,
    Genre,
    ImdbId,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl MovieSortField {
    /// Column name in the `movies` table.
    pub fn column(self) -> &'static str {
        match self {
            MovieSortField::Title => "title",
            MovieSortField::ReleaseDate => "release_date",
            MovieSortField::Rating => "rating",
            MovieSortField::Genre => "genre",
            MovieSortField::ImdbId => "imdb_id",
            MovieSortField::CreatedAt => "created_at",
            MovieSortField::UpdatedAt => "updated_at",
        }
    }
}
