use lectern_core::StoreError;

const UNIQUE_VIOLATION: &str = "23505";
const CHECK_VIOLATION: &str = "23514";
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

/// Maps driver failures onto the store taxonomy.
///
/// Unique violations carry the constrained column, derived from the default
/// Postgres constraint name `<table>_<column>_key`.
pub(crate) fn store_error(error: sqlx::Error) -> StoreError {
    match error {
        sqlx::Error::RowNotFound => StoreError::NotFound,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreError::Unavailable(error.to_string())
        }
        sqlx::Error::Database(db_err) => {
            database_error(db_err.code().as_deref(), db_err.constraint(), db_err.message())
        }
        other => StoreError::Unexpected(other.to_string()),
    }
}

fn database_error(code: Option<&str>, constraint: Option<&str>, message: &str) -> StoreError {
    match code {
        Some(UNIQUE_VIOLATION) => StoreError::Conflict(
            constraint
                .map(constraint_column)
                .unwrap_or_else(|| "record".to_string()),
        ),
        Some(CHECK_VIOLATION | STRING_DATA_RIGHT_TRUNCATION | NUMERIC_VALUE_OUT_OF_RANGE) => {
            StoreError::Rejected(message.to_string())
        }
        _ => StoreError::Unexpected(message.to_string()),
    }
}

fn constraint_column(constraint: &str) -> String {
    constraint
        .trim_end_matches("_key")
        .rsplit('_')
        .next()
        .unwrap_or(constraint)
        .to_string()
}
