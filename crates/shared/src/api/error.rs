use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use deadpool_sqlite::{HookError, InteractError, PoolError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder inner error for routes that have no typed failure modes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Error)]
pub enum Nothing {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub error_messages: Vec<String>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_messages.join(", "))
    }
}

/// Transport error for every route. `Inner` carries a route specific error
/// (see response_errors) with its status code; the remaining variants are
/// infrastructure failures that all surface as 500s
#[derive(Debug, Clone, Error)]
pub enum ServerError<T: fmt::Debug + fmt::Display> {
    #[error("{inner}")]
    Inner { code: StatusCode, inner: T },
    #[error("Validation failed: {inner}")]
    Validation { inner: ValidationError },
    #[error("Database error: {message}")]
    Database { message: String },
    #[error("{message}")]
    Other { message: String },
}

#[macro_export]
macro_rules! other_error {
    ($($arg:tt)*) => {
        $crate::api::error::ServerError::Other { message: format!($($arg)*) }
    };
}

impl<T: fmt::Debug + fmt::Display> From<ValidationError> for ServerError<T> {
    fn from(inner: ValidationError) -> Self {
        Self::Validation { inner }
    }
}

impl<T: fmt::Debug + fmt::Display> From<rusqlite::Error> for ServerError<T> {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database { message: e.to_string() }
    }
}

impl<T: fmt::Debug + fmt::Display> From<PoolError> for ServerError<T> {
    fn from(e: PoolError) -> Self {
        Self::Database { message: format!("Pool error: {e}") }
    }
}

impl<T: fmt::Debug + fmt::Display> From<InteractError> for ServerError<T> {
    fn from(e: InteractError) -> Self {
        Self::Other { message: format!("Interact error: {e}") }
    }
}

impl<T: fmt::Debug + fmt::Display> From<ServerError<T>> for HookError {
    fn from(e: ServerError<T>) -> Self {
        Self::Message(e.to_string())
    }
}

impl<T> IntoResponse for ServerError<T>
where
    T: fmt::Debug + fmt::Display + Serialize,
{
    fn into_response(self) -> Response {
        match self {
            Self::Inner { code, inner } => (code, Json(inner)).into_response(),
            Self::Validation { inner } => (StatusCode::BAD_REQUEST, Json(inner)).into_response(),
            Self::Database { message } | Self::Other { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}
