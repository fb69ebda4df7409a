use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{Error, ErrorType};

/// HTTP response builder for Error enum
impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error_type {
            ErrorType::LabelMe => StatusCode::INTERNAL_SERVER_ERROR,

            ErrorType::UnknownEvent => StatusCode::NOT_FOUND,
            ErrorType::InvalidCategory { .. } => StatusCode::BAD_REQUEST,

            ErrorType::UnknownUser => StatusCode::NOT_FOUND,

            ErrorType::PreferencesCorrupted => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorType::StorageError { .. } => StatusCode::INTERNAL_SERVER_ERROR,

            ErrorType::EmptyMessage => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorType::AssistantUnavailable => StatusCode::BAD_GATEWAY,
            ErrorType::ProxyError => StatusCode::BAD_REQUEST,

            ErrorType::DatabaseError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorType::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorType::InvalidOperation => StatusCode::BAD_REQUEST,
            ErrorType::NotFound => StatusCode::NOT_FOUND,
            ErrorType::FailedValidation { .. } => StatusCode::BAD_REQUEST,
        };

        (status, Json(&self)).into_response()
    }
}
