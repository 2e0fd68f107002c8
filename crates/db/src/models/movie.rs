use catalog_core::entities::{Director, DirectorRef, Movie};
use catalog_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

/// A row from the `movies` table, director by id only.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub release_date: Timestamp,
    pub genre: String,
    pub rating: f64,
    pub imdb_id: String,
    pub director_id: EntityId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A movie row LEFT JOINed with its director.
///
/// The director columns are nullable because of the outer join; a movie whose
/// director row is missing falls back to an id-only reference.
#[derive(Debug, Clone, FromRow)]
pub struct MovieWithDirectorRow {
    #[sqlx(flatten)]
    pub movie: MovieRow,
    pub director_first_name: Option<String>,
    pub director_second_name: Option<String>,
    pub director_birth_date: Option<Timestamp>,
    pub director_bio: Option<String>,
    pub director_created_at: Option<Timestamp>,
    pub director_updated_at: Option<Timestamp>,
}

impl MovieRow {
    fn into_movie(self, director: DirectorRef) -> Movie {
        Movie {
            id: self.id,
            title: self.title,
            description: self.description,
            release_date: self.release_date,
            genre: self.genre,
            rating: self.rating,
            imdb_id: self.imdb_id,
            director,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        let director = DirectorRef::Id(row.director_id);
        row.into_movie(director)
    }
}

impl From<MovieWithDirectorRow> for Movie {
    fn from(row: MovieWithDirectorRow) -> Self {
        let director_id = row.movie.director_id;
        let populated = match (
            row.director_first_name,
            row.director_second_name,
            row.director_birth_date,
            row.director_bio,
            row.director_created_at,
            row.director_updated_at,
        ) {
            (Some(first_name), Some(second_name), Some(birth_date), Some(bio), Some(created_at), Some(updated_at)) => {
                DirectorRef::Populated(Director {
                    id: director_id,
                    first_name,
                    second_name,
                    birth_date,
                    bio,
                    created_at,
                    updated_at,
                })
            }
            _ => DirectorRef::Id(director_id),
        };
        row.movie.into_movie(populated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row() -> MovieRow {
        let now = Utc::now();
        MovieRow {
            id: uuid::Uuid::now_v7(),
            title: "Alien".into(),
            description: "In space no one can hear you scream".into(),
            release_date: now,
            genre: "Horror".into(),
            rating: 8.5,
            imdb_id: "tt0078748".into(),
            director_id: uuid::Uuid::now_v7(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn plain_row_keeps_director_id() {
        let r = row();
        let director_id = r.director_id;
        let movie = Movie::from(r);
        assert_eq!(movie.director, DirectorRef::Id(director_id));
    }

    #[test]
    fn joined_row_populates_director() {
        let now = Utc::now();
        let joined = MovieWithDirectorRow {
            movie: row(),
            director_first_name: Some("Ridley".into()),
            director_second_name: Some("Scott".into()),
            director_birth_date: Some(now),
            director_bio: Some("English filmmaker".into()),
            director_created_at: Some(now),
            director_updated_at: Some(now),
        };
        let movie = Movie::from(joined);
        match movie.director {
            DirectorRef::Populated(d) => assert_eq!(d.second_name, "Scott"),
            other => panic!("expected populated director, got {other:?}"),
        }
    }

    #[test]
    fn missing_join_falls_back_to_id() {
        let joined = MovieWithDirectorRow {
            movie: row(),
            director_first_name: None,
            director_second_name: None,
            director_birth_date: None,
            director_bio: None,
            director_created_at: None,
            director_updated_at: None,
        };
        assert!(matches!(Movie::from(joined).director, DirectorRef::Id(_)));
    }
}
