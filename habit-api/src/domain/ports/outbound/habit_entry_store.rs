//! Habit entry persistence port (outbound).

use async_trait::async_trait;
use time::Date;

use crate::domain::{
    models::{HabitEntryId, HabitId, RecordedEntry},
    HabitError,
};

/// Outbound port for completion records.
#[async_trait]
pub trait HabitEntryStore: Send + Sync + 'static {
    /// All entries of a habit, ascending by date (ties broken by id).
    ///
    /// A stored date that cannot be parsed must surface as
    /// [`HabitError::DataCorruption`].
    async fn list_entries_for_habit(
        &self,
        habit_id: &HabitId,
    ) -> Result<Vec<RecordedEntry>, HabitError>;

    /// Record a completion. Several entries on the same day are allowed.
    async fn create_entry(
        &self,
        habit_id: &HabitId,
        date: Date,
    ) -> Result<RecordedEntry, HabitError>;

    async fn delete_entry(&self, id: &HabitEntryId) -> Result<RecordedEntry, HabitError>;
}
