use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::repo_error::RepositoryError;

#[async_trait]
pub trait HabitRepository {
    async fn get_habits(&self, user_id: i32) -> Result<Vec<DatabaseHabit>, RepositoryError>;
    async fn get_habit(&self, id: i32) -> Result<DatabaseHabit, RepositoryError>;
    async fn append_habit(&self, habit: &NewDatabaseHabit)
        -> Result<DatabaseHabit, RepositoryError>;
    async fn update_habit(
        &self,
        habit: &UpdateDatabaseHabit,
    ) -> Result<DatabaseHabit, RepositoryError>;
    async fn delete_habit(&self, id: i32) -> Result<DatabaseHabit, RepositoryError>;
}

pub struct HabitRepositoryImpl {
    pool: PgPool,
}

impl HabitRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DatabaseHabit {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub colour: String,
    pub index: i32,
    pub active: bool,
}

pub struct NewDatabaseHabit {
    pub user_id: i32,
    pub name: String,
    pub colour: String,
}

pub struct UpdateDatabaseHabit {
    pub id: i32,
    pub name: String,
    pub colour: String,
    pub index: i32,
    pub active: bool,
}

#[async_trait]
impl HabitRepository for HabitRepositoryImpl {
    async fn get_habits(&self, user_id: i32) -> Result<Vec<DatabaseHabit>, RepositoryError> {
        let habits = sqlx::query_as::<_, DatabaseHabit>(
            r#"
            SELECT id, user_id, name, colour, "index", active
            FROM habits
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(habits)
    }

    async fn get_habit(&self, id: i32) -> Result<DatabaseHabit, RepositoryError> {
        sqlx::query_as::<_, DatabaseHabit>(
            r#"
            SELECT id, user_id, name, colour, "index", active
            FROM habits
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::NotFound(format!("habit {}", id)))
    }

    async fn append_habit(
        &self,
        habit: &NewDatabaseHabit,
    ) -> Result<DatabaseHabit, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        // Serializes appends per user so two inserts never compute the same index.
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(i64::from(habit.user_id))
            .execute(&mut *tx)
            .await?;

        let created = sqlx::query_as::<_, DatabaseHabit>(
            r#"
            INSERT INTO habits (user_id, name, colour, "index")
            SELECT $1, $2, $3, COALESCE(MAX("index"), 0) + 1
            FROM habits
            WHERE user_id = $1
            RETURNING id, user_id, name, colour, "index", active
            "#,
        )
        .bind(habit.user_id)
        .bind(&habit.name)
        .bind(&habit.colour)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_habit(
        &self,
        habit: &UpdateDatabaseHabit,
    ) -> Result<DatabaseHabit, RepositoryError> {
        sqlx::query_as::<_, DatabaseHabit>(
            r#"
            UPDATE habits
            SET name = $2, colour = $3, "index" = $4, active = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, name, colour, "index", active
            "#,
        )
        .bind(habit.id)
        .bind(&habit.name)
        .bind(&habit.colour)
        .bind(habit.index)
        .bind(habit.active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::NotFound(format!("habit {}", habit.id)))
    }

    async fn delete_habit(&self, id: i32) -> Result<DatabaseHabit, RepositoryError> {
        sqlx::query_as::<_, DatabaseHabit>(
            r#"
            DELETE FROM habits
            WHERE id = $1
            RETURNING id, user_id, name, colour, "index", active
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::NotFound(format!("habit {}", id)))
    }
}
