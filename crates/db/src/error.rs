//! Translation of driver errors into the domain error taxonomy.

use topicforge_core::error::CoreError;

/// Convert a sqlx error into a [`CoreError`].
///
/// Primary-key and unique violations become `Conflict`; everything else is
/// `Storage` with the driver message kept for logging.
pub fn map_db_error(err: sqlx::Error) -> CoreError {
    match &err {
        sqlx::Error::Database(db_err)
            if db_err.is_unique_violation()
                || db_err.message().contains("UNIQUE constraint failed") =>
        {
            CoreError::Conflict(db_err.message().to_string())
        }
        _ => CoreError::Storage(err.to_string()),
    }
}
