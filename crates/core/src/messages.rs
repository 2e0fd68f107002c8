//! User-facing message catalogue.
//!
//! `validator` derives need string literals, so the DTO attributes repeat
//! some of these; the tests in [`crate::dto`] pin the two together.

// --- Generic input errors ---
pub const PROVIDE_VALID_DATE: &str = "Please provide a valid date";
pub const INVALID_ID: &str = "The id which has been provided is not valid";
pub const PROVIDE_POSITIVE_INTEGER: &str = "You should provide a positive integer";
pub const LIMIT_RANGE: &str = "Limit must be between 1 and 100";
pub const NO_DATA_PROVIDED: &str = "No data provided";

// --- Movie ---
pub const MOVIE_TITLE_REQUIRED: &str = "Movie title is required";
pub const MOVIE_DESCRIPTION_REQUIRED: &str = "Movie description is required";
pub const MOVIE_DIRECTOR_REQUIRED: &str = "Director is required for the movie";
pub const MOVIE_GENRE_REQUIRED: &str = "Movie genre is required";
pub const MOVIE_RELEASE_DATE_REQUIRED: &str = "Movie release date is required";
pub const MOVIE_RATING_RANGE: &str = "Rating must be between 0 and 10";
pub const MOVIE_IMDB_ID_REQUIRED: &str = "IMDB ID is required";

// --- Director ---
pub const DIRECTOR_FIRST_NAME_REQUIRED: &str = "Director first name is required";
pub const DIRECTOR_SECOND_NAME_REQUIRED: &str = "Director second name is required";
pub const DIRECTOR_BIO_REQUIRED: &str = "Director bio is required";
pub const DIRECTOR_BIRTH_DATE_REQUIRED: &str = "Director birth date is required";

// --- Lookups ---
pub const MOVIE_NOT_FOUND: &str = "Movie not found!";
pub const DIRECTOR_NOT_FOUND: &str = "Director not found!";

// --- Infrastructure ---
pub const SOMETHING_WENT_WRONG: &str = "An internal error occurred";
pub const TOO_MANY_REQUESTS: &str = "Too many requests, please try again later.";
