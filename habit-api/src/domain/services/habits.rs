use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;
use itertools::Itertools;
use time::Date;

use crate::domain::{
    models::{
        Habit, HabitEntry, HabitEntryId, HabitId, HabitRecord, HabitUpdate, NewHabit,
        RecordedEntry, UserId,
    },
    ports::{
        inbound::HabitService,
        outbound::{HabitEntryStore, HabitStore},
    },
    streak::{compute_streaks, is_chronological},
    HabitError,
};

/// Implementation of the HabitService inbound port.
///
/// Combos are computed here and only here: stores hand back raw records and
/// every habit leaving this service has been run through [`compute_streaks`].
pub struct HabitServiceImpl<H, E> {
    habits: Arc<H>,
    entries: Arc<E>,
}

impl<H, E> HabitServiceImpl<H, E> {
    pub fn new(habits: Arc<H>, entries: Arc<E>) -> Self {
        Self { habits, entries }
    }
}

impl<H: HabitStore, E: HabitEntryStore> HabitServiceImpl<H, E> {
    async fn streaks_for(&self, habit_id: &HabitId) -> Result<Vec<HabitEntry>, HabitError> {
        let entries = self.entries.list_entries_for_habit(habit_id).await?;

        if !is_chronological(&entries) {
            return Err(HabitError::data_corruption(format!(
                "entries of habit {} are not in date order",
                habit_id
            )));
        }

        Ok(compute_streaks(entries))
    }

    async fn with_streaks(&self, record: HabitRecord) -> Result<Habit, HabitError> {
        let entries = self.streaks_for(&record.id).await?;
        Ok(Habit::from_record(record, entries))
    }
}

fn sorted_by_index(habits: Vec<Habit>) -> Vec<Habit> {
    habits
        .into_iter()
        .sorted_by_key(|habit| (habit.index, habit.id.as_i32()))
        .collect()
}

#[async_trait]
impl<H: HabitStore, E: HabitEntryStore> HabitService for HabitServiceImpl<H, E> {
    async fn list_habits(&self, user_id: &UserId) -> Result<Vec<Habit>, HabitError> {
        let records = self.habits.list_habits_for_user(user_id).await?;

        let habits = sorted_by_index(
            try_join_all(records.into_iter().map(|record| self.with_streaks(record))).await?,
        );

        tracing::debug!(user_id = %user_id, count = habits.len(), "listed habits");
        Ok(habits)
    }

    async fn list_active_habits(&self, user_id: &UserId) -> Result<Vec<Habit>, HabitError> {
        let habits = self.list_habits(user_id).await?;
        Ok(habits.into_iter().filter(|habit| habit.active).collect())
    }

    async fn create_habit(&self, user_id: &UserId, habit: NewHabit) -> Result<Habit, HabitError> {
        let record = self.habits.append_habit(user_id, &habit).await?;

        tracing::info!(
            habit_id = %record.id,
            user_id = %user_id,
            index = record.index,
            "created habit"
        );
        Ok(Habit::from_record(record, Vec::new()))
    }

    async fn update_habit(&self, id: &HabitId, update: HabitUpdate) -> Result<Habit, HabitError> {
        let record = self.habits.update_habit(id, &update).await?;

        tracing::info!(habit_id = %id, "updated habit");
        self.with_streaks(record).await
    }

    async fn update_habits(
        &self,
        user_id: &UserId,
        updates: Vec<(HabitId, HabitUpdate)>,
    ) -> Result<Vec<Habit>, HabitError> {
        let mut habits = Vec::with_capacity(updates.len());
        for (id, update) in updates {
            if self.habits.get_habit(&id).await?.user_id != *user_id {
                return Err(HabitError::HabitNotFound(id));
            }
            habits.push(self.update_habit(&id, update).await?);
        }

        Ok(sorted_by_index(habits))
    }

    async fn delete_habit(&self, id: &HabitId) -> Result<Habit, HabitError> {
        // Entries go away with the habit, so capture them first. An unreadable
        // history must not block the delete that clears it.
        let entries = match self.streaks_for(id).await {
            Ok(entries) => entries,
            Err(HabitError::DataCorruption(msg)) => {
                tracing::warn!(habit_id = %id, "deleting habit with unreadable entries: {}", msg);
                Vec::new()
            }
            Err(err) => return Err(err),
        };
        let record = self.habits.delete_habit(id).await?;

        tracing::info!(habit_id = %id, entries = entries.len(), "deleted habit");
        Ok(Habit::from_record(record, entries))
    }

    async fn create_entry(
        &self,
        habit_id: &HabitId,
        date: Date,
    ) -> Result<RecordedEntry, HabitError> {
        let entry = self.entries.create_entry(habit_id, date).await?;

        tracing::info!(habit_id = %habit_id, entry_id = %entry.id, %date, "checked habit");
        Ok(entry)
    }

    async fn delete_entry(&self, id: &HabitEntryId) -> Result<RecordedEntry, HabitError> {
        let entry = self.entries.delete_entry(id).await?;

        tracing::info!(habit_id = %entry.habit_id, entry_id = %id, "unchecked habit");
        Ok(entry)
    }

    async fn habit_entries(&self, habit_id: &HabitId) -> Result<Vec<HabitEntry>, HabitError> {
        // Surface a missing habit as such rather than as an empty history.
        self.habits.get_habit(habit_id).await?;
        self.streaks_for(habit_id).await
    }
}
