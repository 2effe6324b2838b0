use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::User,
    ports::{inbound::UserService, outbound::UserStore},
    UserError,
};

/// Implementation of the UserService inbound port.
pub struct UserServiceImpl<S> {
    store: Arc<S>,
}

impl<S> UserServiceImpl<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: UserStore> UserService for UserServiceImpl<S> {
    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.store.list_users().await
    }

    async fn create_user(&self, name: &str) -> Result<User, UserError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(UserError::EmptyName);
        }

        let user = self.store.create_user(name).await?;
        tracing::info!(user_id = %user.id, "created user");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::outbound::MockHabitStore;

    #[tokio::test]
    async fn create_user_trims_name() {
        let service = UserServiceImpl::new(Arc::new(MockHabitStore::new()));

        let user = service.create_user("  Reid ").await.unwrap();

        assert_eq!(user.name, "Reid");
        assert_eq!(service.list_users().await.unwrap(), vec![user]);
    }

    #[tokio::test]
    async fn blank_user_name_is_rejected() {
        let service = UserServiceImpl::new(Arc::new(MockHabitStore::new()));

        assert!(matches!(
            service.create_user("   ").await,
            Err(UserError::EmptyName)
        ));
        assert!(service.list_users().await.unwrap().is_empty());
    }
}
