pub(crate) mod error;
pub(crate) mod habit_entries;
pub(crate) mod habits;
pub(crate) mod users;

pub(crate) use error::ApiError;
