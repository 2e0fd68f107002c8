//! Repository for the `movies` table.
//!
//! Listing queries are assembled at runtime from [`MovieFilters`]; the
//! builder returns the WHERE clause together with the typed values to bind
//! so `find_all` and `count` always agree on what matches.

use async_trait::async_trait;
use catalog_core::entities::{Movie, MovieChanges, NewMovie};
use catalog_core::error::RepoError;
use catalog_core::repositories::{FindAllMovieOptions, MovieFilters, MovieRepository, SortSpec};
use catalog_core::types::{new_entity_id, EntityId, Timestamp};
use sqlx::postgres::PgArguments;
use sqlx::query::{QueryAs, QueryScalar};
use sqlx::Postgres;

use crate::error::repo_error;
use crate::models::{MovieRow, MovieWithDirectorRow};
use crate::DbPool;

// ---------------------------------------------------------------------------
// Column lists
// ---------------------------------------------------------------------------

/// Movie columns, qualified with the `m` alias.
const COLUMNS: &str = "\
    m.id, m.title, m.description, m.release_date, m.genre, m.rating, \
    m.imdb_id, m.director_id, m.created_at, m.updated_at";

/// Director columns aliased for [`MovieWithDirectorRow`].
const DIRECTOR_COLUMNS: &str = "\
    d.first_name AS director_first_name, d.second_name AS director_second_name, \
    d.birth_date AS director_birth_date, d.bio AS director_bio, \
    d.created_at AS director_created_at, d.updated_at AS director_updated_at";

const DIRECTOR_JOIN: &str = "LEFT JOIN directors d ON d.id = m.director_id";

// ---------------------------------------------------------------------------
// PgMovieRepository
// ---------------------------------------------------------------------------

pub struct PgMovieRepository {
    pool: DbPool,
}

impl PgMovieRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn fetch_page(&self, options: &FindAllMovieOptions) -> Result<Vec<Movie>, sqlx::Error> {
        let (where_clause, bind_values, bind_idx) = build_movie_filter(&options.filters);
        let order = order_clause(options.sort);
        let limit = i64::from(options.page.limit);
        let offset = i64::try_from(options.page.skip()).unwrap_or(i64::MAX);

        if options.populate_director {
            let query = format!(
                "SELECT {COLUMNS}, {DIRECTOR_COLUMNS} FROM movies m {DIRECTOR_JOIN} {where_clause} \
                 {order} LIMIT ${bind_idx} OFFSET ${}",
                bind_idx + 1
            );
            let rows = bind_values_as(sqlx::query_as::<_, MovieWithDirectorRow>(&query), &bind_values)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;
            Ok(rows.into_iter().map(Movie::from).collect())
        } else {
            let query = format!(
                "SELECT {COLUMNS} FROM movies m {where_clause} \
                 {order} LIMIT ${bind_idx} OFFSET ${}",
                bind_idx + 1
            );
            let rows = bind_values_as(sqlx::query_as::<_, MovieRow>(&query), &bind_values)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;
            Ok(rows.into_iter().map(Movie::from).collect())
        }
    }
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Movie>, RepoError> {
        let query = format!("SELECT {COLUMNS}, {DIRECTOR_COLUMNS} FROM movies m {DIRECTOR_JOIN} WHERE m.id = $1");
        match sqlx::query_as::<_, MovieWithDirectorRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
        {
            Ok(row) => Ok(row.map(Movie::from)),
            Err(err) => {
                tracing::error!(movie_id = %id, error = %err, "find movie failed");
                Ok(None)
            }
        }
    }

    async fn find_all(&self, options: &FindAllMovieOptions) -> Result<Vec<Movie>, RepoError> {
        match self.fetch_page(options).await {
            Ok(movies) => Ok(movies),
            Err(err) => {
                tracing::error!(error = %err, "list movies failed");
                Ok(Vec::new())
            }
        }
    }

    async fn count(&self, filters: &MovieFilters) -> Result<u64, RepoError> {
        let (where_clause, bind_values, _) = build_movie_filter(filters);
        let query = format!("SELECT COUNT(*)::BIGINT AS count FROM movies m {where_clause}");

        match bind_values_scalar(sqlx::query_scalar::<_, i64>(&query), &bind_values)
            .fetch_one(&self.pool)
            .await
        {
            Ok(count) => Ok(u64::try_from(count).unwrap_or(0)),
            Err(err) => {
                tracing::error!(error = %err, "count movies failed");
                Ok(0)
            }
        }
    }

    async fn find_by_director(&self, director_id: EntityId) -> Result<Vec<Movie>, RepoError> {
        let query = format!(
            "SELECT {COLUMNS}, {DIRECTOR_COLUMNS} FROM movies m {DIRECTOR_JOIN} \
             WHERE m.director_id = $1 ORDER BY m.release_date DESC"
        );
        match sqlx::query_as::<_, MovieWithDirectorRow>(&query)
            .bind(director_id)
            .fetch_all(&self.pool)
            .await
        {
            Ok(rows) => Ok(rows.into_iter().map(Movie::from).collect()),
            Err(err) => {
                tracing::error!(director_id = %director_id, error = %err, "find movies by director failed");
                Ok(Vec::new())
            }
        }
    }

    async fn create(&self, movie: &NewMovie) -> Result<Movie, RepoError> {
        let query = format!(
            "WITH m AS ( \
                INSERT INTO movies \
                    (id, title, description, release_date, genre, rating, imdb_id, director_id) \
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
                RETURNING * \
             ) \
             SELECT {COLUMNS}, {DIRECTOR_COLUMNS} FROM m {DIRECTOR_JOIN}"
        );
        sqlx::query_as::<_, MovieWithDirectorRow>(&query)
            .bind(new_entity_id())
            .bind(&movie.title)
            .bind(&movie.description)
            .bind(movie.release_date)
            .bind(&movie.genre)
            .bind(movie.rating)
            .bind(&movie.imdb_id)
            .bind(movie.director_id)
            .fetch_one(&self.pool)
            .await
            .map(Movie::from)
            .map_err(repo_error)
    }

    async fn update(&self, id: EntityId, changes: &MovieChanges) -> Result<Option<Movie>, RepoError> {
        let query = format!(
            "WITH m AS ( \
                UPDATE movies SET \
                    title = COALESCE($2, title), \
                    description = COALESCE($3, description), \
                    release_date = COALESCE($4, release_date), \
                    genre = COALESCE($5, genre), \
                    rating = COALESCE($6, rating), \
                    imdb_id = COALESCE($7, imdb_id), \
                    director_id = COALESCE($8, director_id), \
                    updated_at = NOW() \
                WHERE id = $1 \
                RETURNING * \
             ) \
             SELECT {COLUMNS}, {DIRECTOR_COLUMNS} FROM m {DIRECTOR_JOIN}"
        );
        sqlx::query_as::<_, MovieWithDirectorRow>(&query)
            .bind(id)
            .bind(&changes.title)
            .bind(&changes.description)
            .bind(changes.release_date)
            .bind(&changes.genre)
            .bind(changes.rating)
            .bind(&changes.imdb_id)
            .bind(changes.director_id)
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.map(Movie::from))
            .map_err(repo_error)
    }

    async fn delete(&self, id: EntityId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repo_error)?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Dynamic filter helpers
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built movie queries.
#[derive(Debug, Clone, PartialEq)]
enum BindValue {
    Text(String),
    Float(f64),
    Timestamp(Timestamp),
    Id(EntityId),
}

/// Build a WHERE clause and bind values from `MovieFilters`.
///
/// Returns `(where_clause, bind_values, next_bind_index)`.
/// The `where_clause` is empty if no filters are active, or starts with `WHERE `.
fn build_movie_filter(filters: &MovieFilters) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    if let Some(ref title) = filters.title {
        conditions.push(format!("strpos(lower(m.title), lower(${bind_idx})) > 0"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(title.clone()));
    }

    if let Some(ref genre) = filters.genre {
        conditions.push(format!("m.genre = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(genre.clone()));
    }

    if let Some(rating) = filters.rating {
        conditions.push(format!("m.rating = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Float(rating));
    }

    if let Some(release_date) = filters.release_date {
        conditions.push(format!("m.release_date = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Timestamp(release_date));
    }

    if let Some(director) = filters.director {
        conditions.push(format!("m.director_id = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Id(director));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}

/// `ORDER BY` for a listing. Ties are broken by id so pages are stable.
fn order_clause(sort: SortSpec) -> String {
    format!(
        "ORDER BY m.{} {}, m.id {}",
        sort.field.column(),
        sort.direction.as_sql(),
        sort.direction.as_sql()
    )
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
fn bind_values_as<'q, O>(
    mut q: QueryAs<'q, Postgres, O, PgArguments>,
    bind_values: &'q [BindValue],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for val in bind_values {
        match val {
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Float(v) => q = q.bind(*v),
            BindValue::Timestamp(v) => q = q.bind(*v),
            BindValue::Id(v) => q = q.bind(*v),
        }
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
fn bind_values_scalar<'q>(
    mut q: QueryScalar<'q, Postgres, i64, PgArguments>,
    bind_values: &'q [BindValue],
) -> QueryScalar<'q, Postgres, i64, PgArguments> {
    for val in bind_values {
        match val {
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Float(v) => q = q.bind(*v),
            BindValue::Timestamp(v) => q = q.bind(*v),
            BindValue::Id(v) => q = q.bind(*v),
        }
    }
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::entities::MovieSortField;
    use catalog_core::pagination::SortDirection;

    #[test]
    fn no_filters_means_no_where_clause() {
        let (clause, values, next) = build_movie_filter(&MovieFilters::default());
        assert_eq!(clause, "");
        assert!(values.is_empty());
        assert_eq!(next, 1);
    }

    #[test]
    fn title_is_a_case_insensitive_substring_match() {
        let filters = MovieFilters {
            title: Some("incep".into()),
            ..Default::default()
        };
        let (clause, values, next) = build_movie_filter(&filters);
        assert_eq!(clause, "WHERE strpos(lower(m.title), lower($1)) > 0");
        assert_eq!(values, vec![BindValue::Text("incep".into())]);
        assert_eq!(next, 2);
    }

    #[test]
    fn filters_are_numbered_in_order() {
        let director = uuid::Uuid::now_v7();
        let filters = MovieFilters {
            title: None,
            genre: Some("Action".into()),
            rating: Some(7.0),
            release_date: None,
            director: Some(director),
        };
        let (clause, values, next) = build_movie_filter(&filters);
        assert_eq!(
            clause,
            "WHERE m.genre = $1 AND m.rating = $2 AND m.director_id = $3"
        );
        assert_eq!(
            values,
            vec![
                BindValue::Text("Action".into()),
                BindValue::Float(7.0),
                BindValue::Id(director),
            ]
        );
        assert_eq!(next, 4);
    }

    #[test]
    fn order_clause_uses_column_names() {
        let sort = SortSpec {
            field: MovieSortField::ReleaseDate,
            direction: SortDirection::Asc,
        };
        assert_eq!(order_clause(sort), "ORDER BY m.release_date ASC, m.id ASC");
        assert_eq!(
            order_clause(SortSpec::default()),
            "ORDER BY m.created_at DESC, m.id DESC"
        );
    }
}
