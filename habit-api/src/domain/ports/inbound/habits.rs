use async_trait::async_trait;
use time::Date;

use crate::domain::{
    models::{Habit, HabitEntry, HabitEntryId, HabitId, HabitUpdate, NewHabit, RecordedEntry, UserId},
    HabitError,
};

/// Inbound port for habit tracking.
///
/// This trait defines the use cases that HTTP handlers can invoke.
/// Every habit it returns carries its entries with combos freshly computed.
#[async_trait]
pub trait HabitService: Send + Sync + 'static {
    // ========================================================================
    // Habits
    // ========================================================================

    /// All of a user's habits, ascending by display index.
    async fn list_habits(&self, user_id: &UserId) -> Result<Vec<Habit>, HabitError>;

    /// Same listing as [`HabitService::list_habits`], keeping only active habits.
    async fn list_active_habits(&self, user_id: &UserId) -> Result<Vec<Habit>, HabitError>;

    /// Create a habit at the end of the user's list.
    async fn create_habit(&self, user_id: &UserId, habit: NewHabit) -> Result<Habit, HabitError>;

    /// Replace a habit's editable fields.
    async fn update_habit(&self, id: &HabitId, update: HabitUpdate) -> Result<Habit, HabitError>;

    /// Apply several updates in order, e.g. after the user reorders habits.
    ///
    /// Every habit must belong to `user_id`; one that does not is reported as
    /// not found. Stops at the first failure. Returns the updated habits by index.
    async fn update_habits(
        &self,
        user_id: &UserId,
        updates: Vec<(HabitId, HabitUpdate)>,
    ) -> Result<Vec<Habit>, HabitError>;

    async fn delete_habit(&self, id: &HabitId) -> Result<Habit, HabitError>;

    // ========================================================================
    // Entries
    // ========================================================================

    /// Mark a habit as completed on `date`.
    async fn create_entry(&self, habit_id: &HabitId, date: Date)
        -> Result<RecordedEntry, HabitError>;

    async fn delete_entry(&self, id: &HabitEntryId) -> Result<RecordedEntry, HabitError>;

    /// A habit's entries with their combos.
    async fn habit_entries(&self, habit_id: &HabitId) -> Result<Vec<HabitEntry>, HabitError>;
}
