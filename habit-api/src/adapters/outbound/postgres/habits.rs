//! PostgreSQL implementation of the HabitStore port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{HabitId, HabitRecord, HabitUpdate, NewHabit, UserId},
    ports::outbound::HabitStore,
    HabitError,
};
use crate::repositories::{
    DatabaseHabit, HabitRepository, HabitRepositoryImpl, NewDatabaseHabit, RepositoryError,
    UpdateDatabaseHabit,
};

/// Adapter that implements HabitStore using PostgreSQL.
pub struct PostgresHabitAdapter<R = HabitRepositoryImpl> {
    repo: Arc<R>,
}

impl<R> PostgresHabitAdapter<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: HabitRepository + Send + Sync + 'static> HabitStore for PostgresHabitAdapter<R> {
    async fn list_habits_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<HabitRecord>, HabitError> {
        let habits = self
            .repo
            .get_habits(user_id.as_i32())
            .await
            .map_err(|e| HabitError::storage(e.to_string()))?;

        Ok(habits.into_iter().map(db_habit_to_domain).collect())
    }

    async fn get_habit(&self, id: &HabitId) -> Result<HabitRecord, HabitError> {
        self.repo
            .get_habit(id.as_i32())
            .await
            .map(db_habit_to_domain)
            .map_err(|e| habit_error(e, id))
    }

    async fn append_habit(
        &self,
        user_id: &UserId,
        habit: &NewHabit,
    ) -> Result<HabitRecord, HabitError> {
        let new_habit = NewDatabaseHabit {
            user_id: user_id.as_i32(),
            name: habit.name.to_string(),
            colour: habit.colour.clone(),
        };

        self.repo
            .append_habit(&new_habit)
            .await
            .map(db_habit_to_domain)
            .map_err(|e| {
                if e.is_foreign_key_violation() {
                    HabitError::UserNotFound(*user_id)
                } else {
                    HabitError::storage(e.to_string())
                }
            })
    }

    async fn update_habit(
        &self,
        id: &HabitId,
        update: &HabitUpdate,
    ) -> Result<HabitRecord, HabitError> {
        let habit = UpdateDatabaseHabit {
            id: id.as_i32(),
            name: update.name.to_string(),
            colour: update.colour.clone(),
            index: update.index,
            active: update.active,
        };

        self.repo
            .update_habit(&habit)
            .await
            .map(db_habit_to_domain)
            .map_err(|e| habit_error(e, id))
    }

    async fn delete_habit(&self, id: &HabitId) -> Result<HabitRecord, HabitError> {
        self.repo
            .delete_habit(id.as_i32())
            .await
            .map(db_habit_to_domain)
            .map_err(|e| habit_error(e, id))
    }
}

fn habit_error(err: RepositoryError, id: &HabitId) -> HabitError {
    match err {
        RepositoryError::NotFound(_) => HabitError::HabitNotFound(*id),
        err => HabitError::storage(err.to_string()),
    }
}

/// Convert a database habit to a domain HabitRecord.
fn db_habit_to_domain(habit: DatabaseHabit) -> HabitRecord {
    HabitRecord {
        id: HabitId::new(habit.id),
        user_id: UserId::new(habit.user_id),
        name: habit.name,
        colour: habit.colour,
        index: habit.index,
        active: habit.active,
    }
}
