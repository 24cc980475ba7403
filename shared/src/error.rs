use axum::{http::StatusCode, response::IntoResponse};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("end_date must be after start_date")]
    InvalidTimeRange,
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("database operation error")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("migration error")]
    MigrationError(#[source] sqlx::migrate::MigrateError),
    #[error("key value store error")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("authentication is required")]
    UnauthenticatedError,
    #[error("not enough permissions")]
    ForbiddenOperation,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::InvalidTimeRange
            | AppError::ValidationError(_)
            | AppError::ConversionEntityError(_) => StatusCode::BAD_REQUEST,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::ForbiddenOperation => StatusCode::FORBIDDEN,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            e @ (AppError::SpecificOperationError(_)
            | AppError::MigrationError(_)
            | AppError::KeyValueStoreError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e, error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        status_code.into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(
            AppError::InvalidTimeRange.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::EntityNotFound("reservation".into())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ForbiddenOperation.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::UnauthenticatedError.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn infrastructure_errors_map_to_500() {
        let err = AppError::SpecificOperationError(sqlx::Error::RowNotFound);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
