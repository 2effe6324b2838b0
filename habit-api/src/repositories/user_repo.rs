use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::repo_error::RepositoryError;

#[async_trait]
pub trait UserRepository {
    async fn get_users(&self) -> Result<Vec<DatabaseUser>, RepositoryError>;
    async fn create_user(&self, name: &str) -> Result<DatabaseUser, RepositoryError>;
}

pub struct UserRepositoryImpl {
    pool: PgPool,
}

impl UserRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DatabaseUser {
    pub id: i32,
    pub name: String,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn get_users(&self) -> Result<Vec<DatabaseUser>, RepositoryError> {
        let users = sqlx::query_as::<_, DatabaseUser>(
            r#"
            SELECT id, name
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn create_user(&self, name: &str) -> Result<DatabaseUser, RepositoryError> {
        let user = sqlx::query_as::<_, DatabaseUser>(
            r#"
            INSERT INTO users (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}
