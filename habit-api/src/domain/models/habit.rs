use time::Date;

use super::{HabitEntryId, HabitId, UserId};
use crate::domain::HabitName;

/// Habit metadata as held by storage, without any entries attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitRecord {
    pub id: HabitId,
    pub user_id: UserId,
    pub name: String,
    pub colour: String,
    /// User-chosen display position, unrelated to entry chronology.
    pub index: i32,
    pub active: bool,
}

/// A completion exactly as stored. Carries no streak information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedEntry {
    pub id: HabitEntryId,
    pub habit_id: HabitId,
    pub date: Date,
}

impl RecordedEntry {
    pub fn new(id: impl Into<HabitEntryId>, habit_id: impl Into<HabitId>, date: Date) -> Self {
        Self {
            id: id.into(),
            habit_id: habit_id.into(),
            date,
        }
    }
}

/// A completion together with its derived combo.
///
/// `combo` is the number of consecutive completed days ending at (and
/// including) this entry. It is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HabitEntry {
    pub id: HabitEntryId,
    pub habit_id: HabitId,
    pub date: Date,
    pub combo: u32,
}

/// A habit with its entries in ascending date order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    pub id: HabitId,
    pub user_id: UserId,
    pub name: String,
    pub colour: String,
    pub index: i32,
    pub active: bool,
    pub entries: Vec<HabitEntry>,
}

impl Habit {
    pub fn from_record(record: HabitRecord, entries: Vec<HabitEntry>) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            name: record.name,
            colour: record.colour,
            index: record.index,
            active: record.active,
            entries,
        }
    }
}

/// Request to create a habit. The store decides the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHabit {
    pub name: HabitName,
    pub colour: String,
}

impl NewHabit {
    pub fn new(name: HabitName, colour: impl AsRef<str>) -> Self {
        Self {
            name,
            colour: colour.as_ref().trim().to_string(),
        }
    }
}

/// Full replacement of a habit's editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitUpdate {
    pub name: HabitName,
    pub colour: String,
    pub index: i32,
    pub active: bool,
}

impl HabitUpdate {
    pub fn new(name: HabitName, colour: impl AsRef<str>, index: i32, active: bool) -> Self {
        Self {
            name,
            colour: colour.as_ref().trim().to_string(),
            index,
            active,
        }
    }
}
