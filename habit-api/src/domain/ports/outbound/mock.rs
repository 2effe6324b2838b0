//! In-memory store implementing every outbound port, for tests.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use time::Date;

use super::{HabitEntryStore, HabitStore, UserStore};
use crate::domain::{
    models::{
        HabitEntryId, HabitId, HabitRecord, HabitUpdate, NewHabit, RecordedEntry, User, UserId,
    },
    HabitError, UserError,
};

#[derive(Default)]
struct State {
    users: Vec<User>,
    habits: Vec<HabitRecord>,
    /// Kept in insertion order, like rows in a table without an ORDER BY.
    entries: Vec<RecordedEntry>,
    corrupt: HashSet<HabitId>,
    next_id: i32,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// Mock store backed by in-memory vectors.
///
/// Entries seeded with [`MockHabitStore::with_entries`] are returned exactly in
/// the order given, so tests can simulate storage handing back unordered rows.
/// Entries added through [`HabitEntryStore::create_entry`] are inserted in
/// date order.
#[derive(Clone, Default)]
pub struct MockHabitStore {
    state: Arc<Mutex<State>>,
}

impl MockHabitStore {
    pub fn new() -> Self {
        let store = Self::default();
        store.state.lock().unwrap().next_id = 1000;
        store
    }

    pub fn with_user(self, id: i32, name: &str) -> Self {
        self.state.lock().unwrap().users.push(User {
            id: UserId::new(id),
            name: name.to_string(),
        });
        self
    }

    pub fn with_habits(self, habits: Vec<HabitRecord>) -> Self {
        self.state.lock().unwrap().habits.extend(habits);
        self
    }

    pub fn with_entries(self, entries: Vec<RecordedEntry>) -> Self {
        self.state.lock().unwrap().entries.extend(entries);
        self
    }

    /// Make listing this habit's entries fail as if a stored date were unreadable.
    pub fn with_corrupt_entries(self, habit_id: i32) -> Self {
        self.state
            .lock()
            .unwrap()
            .corrupt
            .insert(HabitId::new(habit_id));
        self
    }

    pub fn habit_count(&self) -> usize {
        self.state.lock().unwrap().habits.len()
    }
}

#[async_trait]
impl HabitStore for MockHabitStore {
    async fn list_habits_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<HabitRecord>, HabitError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .habits
            .iter()
            .filter(|habit| habit.user_id == *user_id)
            .cloned()
            .collect())
    }

    async fn get_habit(&self, id: &HabitId) -> Result<HabitRecord, HabitError> {
        let state = self.state.lock().unwrap();
        state
            .habits
            .iter()
            .find(|habit| habit.id == *id)
            .cloned()
            .ok_or(HabitError::HabitNotFound(*id))
    }

    async fn append_habit(
        &self,
        user_id: &UserId,
        habit: &NewHabit,
    ) -> Result<HabitRecord, HabitError> {
        let mut state = self.state.lock().unwrap();

        if !state.users.iter().any(|user| user.id == *user_id) {
            return Err(HabitError::UserNotFound(*user_id));
        }

        let index = state
            .habits
            .iter()
            .filter(|existing| existing.user_id == *user_id)
            .map(|existing| existing.index)
            .max()
            .unwrap_or(0)
            + 1;

        let record = HabitRecord {
            id: HabitId::new(state.next_id()),
            user_id: *user_id,
            name: habit.name.to_string(),
            colour: habit.colour.clone(),
            index,
            active: true,
        };
        state.habits.push(record.clone());

        Ok(record)
    }

    async fn update_habit(
        &self,
        id: &HabitId,
        update: &HabitUpdate,
    ) -> Result<HabitRecord, HabitError> {
        let mut state = self.state.lock().unwrap();
        let habit = state
            .habits
            .iter_mut()
            .find(|habit| habit.id == *id)
            .ok_or(HabitError::HabitNotFound(*id))?;

        habit.name = update.name.to_string();
        habit.colour = update.colour.clone();
        habit.index = update.index;
        habit.active = update.active;

        Ok(habit.clone())
    }

    async fn delete_habit(&self, id: &HabitId) -> Result<HabitRecord, HabitError> {
        let mut state = self.state.lock().unwrap();
        let position = state
            .habits
            .iter()
            .position(|habit| habit.id == *id)
            .ok_or(HabitError::HabitNotFound(*id))?;

        state.entries.retain(|entry| entry.habit_id != *id);
        Ok(state.habits.remove(position))
    }
}

#[async_trait]
impl HabitEntryStore for MockHabitStore {
    async fn list_entries_for_habit(
        &self,
        habit_id: &HabitId,
    ) -> Result<Vec<RecordedEntry>, HabitError> {
        let state = self.state.lock().unwrap();

        if state.corrupt.contains(habit_id) {
            return Err(HabitError::data_corruption(format!(
                "invalid date stored for habit {}",
                habit_id
            )));
        }

        Ok(state
            .entries
            .iter()
            .filter(|entry| entry.habit_id == *habit_id)
            .copied()
            .collect())
    }

    async fn create_entry(
        &self,
        habit_id: &HabitId,
        date: Date,
    ) -> Result<RecordedEntry, HabitError> {
        let mut state = self.state.lock().unwrap();

        if !state.habits.iter().any(|habit| habit.id == *habit_id) {
            return Err(HabitError::HabitNotFound(*habit_id));
        }

        let entry = RecordedEntry::new(state.next_id(), *habit_id, date);
        let position = state
            .entries
            .iter()
            .position(|existing| existing.date > date)
            .unwrap_or(state.entries.len());
        state.entries.insert(position, entry);

        Ok(entry)
    }

    async fn delete_entry(&self, id: &HabitEntryId) -> Result<RecordedEntry, HabitError> {
        let mut state = self.state.lock().unwrap();
        let position = state
            .entries
            .iter()
            .position(|entry| entry.id == *id)
            .ok_or(HabitError::EntryNotFound(*id))?;

        Ok(state.entries.remove(position))
    }
}

#[async_trait]
impl UserStore for MockHabitStore {
    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        Ok(self.state.lock().unwrap().users.clone())
    }

    async fn create_user(&self, name: &str) -> Result<User, UserError> {
        let mut state = self.state.lock().unwrap();
        let user = User {
            id: UserId::new(state.next_id()),
            name: name.to_string(),
        };
        state.users.push(user.clone());
        Ok(user)
    }
}
