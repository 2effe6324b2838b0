use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::repo_error::RepositoryError;

#[async_trait]
pub trait HabitEntryRepository {
    async fn get_entries(&self, habit_id: i32)
        -> Result<Vec<DatabaseHabitEntry>, RepositoryError>;
    async fn create_entry(
        &self,
        habit_id: i32,
        date: &str,
    ) -> Result<DatabaseHabitEntry, RepositoryError>;
    async fn delete_entry(&self, id: i32) -> Result<DatabaseHabitEntry, RepositoryError>;
}

pub struct HabitEntryRepositoryImpl {
    pool: PgPool,
}

impl HabitEntryRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// A completion row. `date` is stored as `YYYY-MM-DD` text.
#[derive(Debug, Clone, FromRow)]
pub struct DatabaseHabitEntry {
    pub id: i32,
    pub habit_id: i32,
    pub date: String,
}

#[async_trait]
impl HabitEntryRepository for HabitEntryRepositoryImpl {
    async fn get_entries(
        &self,
        habit_id: i32,
    ) -> Result<Vec<DatabaseHabitEntry>, RepositoryError> {
        // Zero-padded YYYY-MM-DD text sorts chronologically.
        let entries = sqlx::query_as::<_, DatabaseHabitEntry>(
            r#"
            SELECT id, habit_id, date
            FROM habit_entries
            WHERE habit_id = $1
            ORDER BY date ASC, id ASC
            "#,
        )
        .bind(habit_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn create_entry(
        &self,
        habit_id: i32,
        date: &str,
    ) -> Result<DatabaseHabitEntry, RepositoryError> {
        let entry = sqlx::query_as::<_, DatabaseHabitEntry>(
            r#"
            INSERT INTO habit_entries (habit_id, date)
            VALUES ($1, $2)
            RETURNING id, habit_id, date
            "#,
        )
        .bind(habit_id)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn delete_entry(&self, id: i32) -> Result<DatabaseHabitEntry, RepositoryError> {
        sqlx::query_as::<_, DatabaseHabitEntry>(
            r#"
            DELETE FROM habit_entries
            WHERE id = $1
            RETURNING id, habit_id, date
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::NotFound(format!("habit entry {}", id)))
    }
}
