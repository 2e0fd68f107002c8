//! Entity builders shared by the use-case tests.

use chrono::{TimeZone, Utc};

use crate::entities::{Director, DirectorRef, Movie, NewDirector, NewMovie};
use crate::types::EntityId;

pub fn director(id: EntityId) -> Director {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Director {
        id,
        first_name: "Christopher".into(),
        second_name: "Nolan".into(),
        birth_date: Utc.with_ymd_and_hms(1970, 7, 30, 0, 0, 0).unwrap(),
        bio: "British-American filmmaker".into(),
        created_at: at,
        updated_at: at,
    }
}

pub fn new_director() -> NewDirector {
    let d = director(EntityId::nil());
    NewDirector {
        first_name: d.first_name,
        second_name: d.second_name,
        birth_date: d.birth_date,
        bio: d.bio,
    }
}

pub fn movie(id: EntityId, director_id: EntityId) -> Movie {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Movie {
        id,
        title: "Inception".into(),
        description: "A thief who steals corporate secrets".into(),
        release_date: Utc.with_ymd_and_hms(2010, 7, 16, 0, 0, 0).unwrap(),
        genre: "Sci-Fi".into(),
        rating: 8.8,
        imdb_id: "tt1375666".into(),
        director: DirectorRef::Populated(director(director_id)),
        created_at: at,
        updated_at: at,
    }
}

pub fn new_movie(director_id: EntityId) -> NewMovie {
    let m = movie(EntityId::nil(), director_id);
    NewMovie {
        title: m.title,
        description: m.description,
        release_date: m.release_date,
        genre: m.genre,
        rating: m.rating,
        imdb_id: m.imdb_id,
        director_id,
    }
}
