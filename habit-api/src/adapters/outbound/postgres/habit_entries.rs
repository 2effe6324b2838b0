//! PostgreSQL implementation of the HabitEntryStore port.
//!
//! Dates live in the database as `YYYY-MM-DD` text; this adapter owns the
//! parse/format round trip and reports unreadable rows as data corruption.

use std::sync::Arc;

use async_trait::async_trait;
use time::Date;

use crate::domain::{
    models::{parse_calendar_date, HabitEntryId, HabitId, RecordedEntry},
    ports::outbound::HabitEntryStore,
    HabitError,
};
use crate::repositories::{
    DatabaseHabitEntry, HabitEntryRepository, HabitEntryRepositoryImpl, RepositoryError,
};

/// Adapter that implements HabitEntryStore using PostgreSQL.
pub struct PostgresHabitEntryAdapter<R = HabitEntryRepositoryImpl> {
    repo: Arc<R>,
}

impl<R> PostgresHabitEntryAdapter<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: HabitEntryRepository + Send + Sync + 'static> HabitEntryStore
    for PostgresHabitEntryAdapter<R>
{
    async fn list_entries_for_habit(
        &self,
        habit_id: &HabitId,
    ) -> Result<Vec<RecordedEntry>, HabitError> {
        let entries = self
            .repo
            .get_entries(habit_id.as_i32())
            .await
            .map_err(|e| HabitError::storage(e.to_string()))?;

        entries.into_iter().map(db_entry_to_domain).collect()
    }

    async fn create_entry(
        &self,
        habit_id: &HabitId,
        date: Date,
    ) -> Result<RecordedEntry, HabitError> {
        let entry = self
            .repo
            .create_entry(habit_id.as_i32(), &date.to_string())
            .await
            .map_err(|e| {
                if e.is_foreign_key_violation() {
                    HabitError::HabitNotFound(*habit_id)
                } else {
                    HabitError::storage(e.to_string())
                }
            })?;

        db_entry_to_domain(entry)
    }

    async fn delete_entry(&self, id: &HabitEntryId) -> Result<RecordedEntry, HabitError> {
        let entry = self
            .repo
            .delete_entry(id.as_i32())
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => HabitError::EntryNotFound(*id),
                e => HabitError::storage(e.to_string()),
            })?;

        db_entry_to_domain(entry)
    }
}

/// Convert a database entry to a domain RecordedEntry.
fn db_entry_to_domain(entry: DatabaseHabitEntry) -> Result<RecordedEntry, HabitError> {
    let date = parse_calendar_date(&entry.date).map_err(|e| {
        tracing::error!(
            entry_id = entry.id,
            habit_id = entry.habit_id,
            value = %entry.date,
            "unreadable habit entry date: {}",
            e
        );
        HabitError::data_corruption(format!(
            "entry {} has invalid date '{}': {}",
            entry.id, entry.date, e
        ))
    })?;

    Ok(RecordedEntry::new(entry.id, entry.habit_id, date))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use time::macros::date;

    use super::*;

    /// Returns canned rows in the order given.
    #[derive(Default)]
    struct CannedEntries {
        rows: Mutex<Vec<DatabaseHabitEntry>>,
    }

    impl CannedEntries {
        fn with_rows(rows: &[(i32, &str)]) -> Arc<Self> {
            let rows = rows
                .iter()
                .map(|(id, date)| DatabaseHabitEntry {
                    id: *id,
                    habit_id: 1,
                    date: date.to_string(),
                })
                .collect();
            Arc::new(Self {
                rows: Mutex::new(rows),
            })
        }
    }

    #[async_trait]
    impl HabitEntryRepository for CannedEntries {
        async fn get_entries(
            &self,
            _habit_id: i32,
        ) -> Result<Vec<DatabaseHabitEntry>, RepositoryError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn create_entry(
            &self,
            habit_id: i32,
            date: &str,
        ) -> Result<DatabaseHabitEntry, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let entry = DatabaseHabitEntry {
                id: rows.len() as i32 + 1,
                habit_id,
                date: date.to_string(),
            };
            rows.push(entry.clone());
            Ok(entry)
        }

        async fn delete_entry(&self, id: i32) -> Result<DatabaseHabitEntry, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let position = rows
                .iter()
                .position(|row| row.id == id)
                .ok_or_else(|| RepositoryError::NotFound(format!("habit entry {}", id)))?;
            Ok(rows.remove(position))
        }
    }

    #[tokio::test]
    async fn stored_dates_are_parsed() {
        let adapter = PostgresHabitEntryAdapter::new(CannedEntries::with_rows(&[
            (1, "2024-01-01"),
            (2, "2024-01-02"),
        ]));

        let entries = adapter.list_entries_for_habit(&HabitId::new(1)).await.unwrap();

        assert_eq!(
            entries,
            vec![
                RecordedEntry::new(1, 1, date!(2024 - 01 - 01)),
                RecordedEntry::new(2, 1, date!(2024 - 01 - 02)),
            ]
        );
    }

    #[tokio::test]
    async fn malformed_stored_date_is_data_corruption() {
        let adapter = PostgresHabitEntryAdapter::new(CannedEntries::with_rows(&[
            (1, "2024-01-01"),
            (2, "2024-13-45"),
        ]));

        let err = adapter
            .list_entries_for_habit(&HabitId::new(1))
            .await
            .unwrap_err();

        assert!(matches!(err, HabitError::DataCorruption(msg) if msg.contains("2024-13-45")));
    }

    #[tokio::test]
    async fn created_entry_is_stored_as_calendar_text() {
        let repo = CannedEntries::with_rows(&[]);
        let adapter = PostgresHabitEntryAdapter::new(repo.clone());

        let entry = adapter
            .create_entry(&HabitId::new(1), date!(2024 - 07 - 04))
            .await
            .unwrap();

        assert_eq!(entry.date, date!(2024 - 07 - 04));
        assert_eq!(repo.rows.lock().unwrap()[0].date, "2024-07-04");
    }

    #[tokio::test]
    async fn deleting_a_missing_entry_is_not_found() {
        let adapter = PostgresHabitEntryAdapter::new(CannedEntries::with_rows(&[]));

        let err = adapter.delete_entry(&HabitEntryId::new(9)).await.unwrap_err();

        assert!(matches!(err, HabitError::EntryNotFound(id) if id == HabitEntryId::new(9)));
    }
}
