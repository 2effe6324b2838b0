//! Habit persistence port (outbound).

use async_trait::async_trait;

use crate::domain::{
    models::{HabitId, HabitRecord, HabitUpdate, NewHabit, UserId},
    HabitError,
};

/// Outbound port for habit metadata persistence.
///
/// Entries are not part of this port; see [`super::HabitEntryStore`].
#[async_trait]
pub trait HabitStore: Send + Sync + 'static {
    /// All habits owned by a user, in no particular order.
    async fn list_habits_for_user(&self, user_id: &UserId)
        -> Result<Vec<HabitRecord>, HabitError>;

    /// A single habit by id.
    async fn get_habit(&self, id: &HabitId) -> Result<HabitRecord, HabitError>;

    /// Create a habit at the end of the user's list.
    ///
    /// The index is `max(existing) + 1`, or 1 for a user's first habit, and
    /// must be assigned atomically with the insert so concurrent creations
    /// never share an index.
    async fn append_habit(
        &self,
        user_id: &UserId,
        habit: &NewHabit,
    ) -> Result<HabitRecord, HabitError>;

    /// Replace a habit's editable fields.
    async fn update_habit(
        &self,
        id: &HabitId,
        update: &HabitUpdate,
    ) -> Result<HabitRecord, HabitError>;

    /// Delete a habit (and with it all of its entries).
    async fn delete_habit(&self, id: &HabitId) -> Result<HabitRecord, HabitError>;
}
