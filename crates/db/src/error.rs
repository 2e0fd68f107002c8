use catalog_core::error::RepoError;

/// SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Translate a driver error into the repository error taxonomy.
///
/// Unique and foreign-key violations become [`RepoError::Conflict`] carrying
/// the constraint name; everything else is an opaque backend failure.
pub fn repo_error(err: sqlx::Error) -> RepoError {
    if let sqlx::Error::Database(db_err) = &err {
        let code = db_err.code();
        if matches!(code.as_deref(), Some(UNIQUE_VIOLATION) | Some(FOREIGN_KEY_VIOLATION)) {
            let constraint = db_err.constraint().unwrap_or("unknown").to_string();
            let message = match code.as_deref() {
                Some(UNIQUE_VIOLATION) => format!("Duplicate value violates unique constraint: {constraint}"),
                _ => format!("Operation violates reference constraint: {constraint}"),
            };
            return RepoError::Conflict { constraint, message };
        }
    }
    RepoError::Backend(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_backend_failures() {
        let err = repo_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, RepoError::Backend(_)));
    }

    #[test]
    fn row_not_found_is_a_backend_failure() {
        assert!(matches!(repo_error(sqlx::Error::RowNotFound), RepoError::Backend(_)));
    }
}
