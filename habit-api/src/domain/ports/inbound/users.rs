use async_trait::async_trait;

use crate::domain::{models::User, UserError};

/// Inbound port for user management.
#[async_trait]
pub trait UserService: Send + Sync + 'static {
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    async fn create_user(&self, name: &str) -> Result<User, UserError>;
}
