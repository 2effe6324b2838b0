mod habit_entry_repo;
mod habit_repo;
mod repo_error;
mod user_repo;

pub use habit_entry_repo::*;
pub use habit_repo::*;
pub use repo_error::RepositoryError;
pub use user_repo::*;
