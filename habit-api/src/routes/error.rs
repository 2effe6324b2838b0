use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::domain::{HabitError, UserError};

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    HabitNotFound,
    HabitEntryNotFound,
    UserNotFound,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<ErrorCode>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    code: Option<ErrorCode>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            code: self.code,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<HabitError> for ApiError {
    fn from(err: HabitError) -> Self {
        match err {
            HabitError::HabitNotFound(_) => {
                Self::not_found(err.to_string()).with_code(ErrorCode::HabitNotFound)
            }
            HabitError::EntryNotFound(_) => {
                Self::not_found(err.to_string()).with_code(ErrorCode::HabitEntryNotFound)
            }
            HabitError::UserNotFound(_) => {
                Self::not_found(err.to_string()).with_code(ErrorCode::UserNotFound)
            }
            HabitError::InvalidHabit(_) => Self::bad_request(err.to_string()),
            HabitError::DataCorruption(ref msg) => {
                tracing::error!("Corrupt habit data: {}", msg);
                Self::internal("stored habit data is corrupt")
            }
            HabitError::Storage(ref msg) => {
                tracing::error!("Habit storage error: {}", msg);
                Self::internal("habit storage failed")
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmptyName => Self::bad_request(err.to_string()),
            UserError::Storage(ref msg) => {
                tracing::error!("User storage error: {}", msg);
                Self::internal("user storage failed")
            }
        }
    }
}
