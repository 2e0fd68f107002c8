use crate::dto::{CreateMovieDto, MovieDto, MovieQueryDto, UpdateMovieDto};
use crate::entities::{Movie, MovieChanges, NewMovie};
use crate::error::CoreError;
use crate::mappers::director::director_ref_to_dto;
use crate::mappers::required;
use crate::messages;
use crate::pagination::PageRequest;
use crate::repositories::{MovieFilters, SortSpec};
use crate::types::EntityId;
use crate::use_cases::movie::ListMoviesQuery;
use crate::validation::parse_entity_id;

pub fn movie_to_dto(movie: &Movie) -> MovieDto {
    MovieDto {
        id: movie.id,
        title: movie.title.clone(),
        description: movie.description.clone(),
        release_date: movie.release_date,
        genre: movie.genre.clone(),
        rating: movie.rating,
        imdb_id: movie.imdb_id.clone(),
        director: director_ref_to_dto(&movie.director),
        created_at: movie.created_at,
        updated_at: movie.updated_at,
    }
}

pub fn create_dto_to_new_movie(dto: CreateMovieDto) -> Result<NewMovie, CoreError> {
    let director = required(dto.director, messages::MOVIE_DIRECTOR_REQUIRED)?;
    Ok(NewMovie {
        title: required(dto.title, messages::MOVIE_TITLE_REQUIRED)?,
        description: required(dto.description, messages::MOVIE_DESCRIPTION_REQUIRED)?,
        release_date: required(dto.release_date, messages::MOVIE_RELEASE_DATE_REQUIRED)?,
        genre: required(dto.genre, messages::MOVIE_GENRE_REQUIRED)?,
        rating: dto.rating.unwrap_or(0.0),
        imdb_id: required(dto.imdb_id, messages::MOVIE_IMDB_ID_REQUIRED)?,
        director_id: entity_id(&director)?,
    })
}

/// Only fields present in the request end up in the change set.
pub fn update_dto_to_changes(dto: UpdateMovieDto) -> Result<MovieChanges, CoreError> {
    let changes = MovieChanges {
        title: dto.title,
        description: dto.description,
        release_date: dto.release_date,
        genre: dto.genre,
        rating: dto.rating,
        imdb_id: dto.imdb_id,
        director_id: dto.director.as_deref().map(entity_id).transpose()?,
    };
    if changes.is_empty() {
        return Err(CoreError::Validation(messages::NO_DATA_PROVIDED.to_string()));
    }
    Ok(changes)
}

pub fn query_dto_to_list_query(dto: MovieQueryDto) -> Result<ListMoviesQuery, CoreError> {
    let page = dto.page.map(positive).transpose()?;
    let limit = dto.limit.map(positive).transpose()?;
    Ok(ListMoviesQuery {
        page: PageRequest::new(page, limit),
        sort: SortSpec {
            field: dto.sort_by.unwrap_or_default(),
            direction: dto.sort_dir.unwrap_or_default(),
        },
        filters: MovieFilters {
            title: dto.title.filter(|t| !t.is_empty()),
            genre: dto.genre.filter(|g| !g.is_empty()),
            rating: dto.rating,
            release_date: dto.release_date,
            director: dto.director.as_deref().map(entity_id).transpose()?,
        },
    })
}

fn entity_id(raw: &str) -> Result<EntityId, CoreError> {
    parse_entity_id(raw).ok_or_else(|| CoreError::Validation(messages::INVALID_ID.to_string()))
}

fn positive(value: i64) -> Result<u32, CoreError> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| CoreError::Validation(messages::PROVIDE_POSITIVE_INTEGER.to_string()))
}
