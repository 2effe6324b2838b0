use thiserror::Error;

use super::{
    models::{HabitEntryId, HabitId, UserId},
    HabitNameError,
};

/// Errors that can occur during habit and entry operations.
#[derive(Debug, Error)]
pub enum HabitError {
    #[error("habit not found: {0}")]
    HabitNotFound(HabitId),
    #[error("habit entry not found: {0}")]
    EntryNotFound(HabitEntryId),
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    #[error("invalid habit: {0}")]
    InvalidHabit(String),
    /// Stored data could not be interpreted, e.g. a malformed date string or
    /// entries returned out of order.
    #[error("corrupt habit data: {0}")]
    DataCorruption(String),
    #[error("{0}")]
    Storage(String),
}

impl HabitError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn data_corruption(msg: impl Into<String>) -> Self {
        Self::DataCorruption(msg.into())
    }
}

impl From<HabitNameError> for HabitError {
    fn from(err: HabitNameError) -> Self {
        Self::InvalidHabit(err.to_string())
    }
}

/// Errors that can occur during user operations.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("user name must not be empty")]
    EmptyName,
    #[error("{0}")]
    Storage(String),
}

impl UserError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
