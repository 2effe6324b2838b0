//! PostgreSQL implementation of the UserStore port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{User, UserId},
    ports::outbound::UserStore,
    UserError,
};
use crate::repositories::{DatabaseUser, UserRepository, UserRepositoryImpl};

/// Adapter that implements UserStore using PostgreSQL.
pub struct PostgresUserAdapter<R = UserRepositoryImpl> {
    repo: Arc<R>,
}

impl<R> PostgresUserAdapter<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: UserRepository + Send + Sync + 'static> UserStore for PostgresUserAdapter<R> {
    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        let users = self
            .repo
            .get_users()
            .await
            .map_err(|e| UserError::storage(e.to_string()))?;

        Ok(users.into_iter().map(db_user_to_domain).collect())
    }

    async fn create_user(&self, name: &str) -> Result<User, UserError> {
        self.repo
            .create_user(name)
            .await
            .map(db_user_to_domain)
            .map_err(|e| UserError::storage(e.to_string()))
    }
}

fn db_user_to_domain(user: DatabaseUser) -> User {
    User {
        id: UserId::new(user.id),
        name: user.name,
    }
}
