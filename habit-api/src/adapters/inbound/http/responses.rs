//! HTTP response types for habit endpoints.
//!
//! These types serialize to the JSON format expected by the frontend.

use serde::Serialize;
use time::Date;

use crate::domain::models::{calendar_date, Habit, HabitEntry, RecordedEntry, User};

/// A habit with its entries and their combos.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitResponse {
    pub id: i32,
    pub name: String,
    pub colour: String,
    pub index: i32,
    pub active: bool,
    pub entries: Vec<HabitEntryResponse>,
}

impl From<Habit> for HabitResponse {
    fn from(habit: Habit) -> Self {
        Self {
            id: habit.id.as_i32(),
            name: habit.name,
            colour: habit.colour,
            index: habit.index,
            active: habit.active,
            entries: habit.entries.into_iter().map(HabitEntryResponse::from).collect(),
        }
    }
}

/// One completed day within a habit listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitEntryResponse {
    pub id: i32,
    /// Date in YYYY-MM-DD format.
    #[serde(with = "calendar_date")]
    pub date: Date,
    pub combo: u32,
}

impl From<HabitEntry> for HabitEntryResponse {
    fn from(entry: HabitEntry) -> Self {
        Self {
            id: entry.id.as_i32(),
            date: entry.date,
            combo: entry.combo,
        }
    }
}

/// A single entry as created or deleted. Carries no combo.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedEntryResponse {
    pub id: i32,
    pub habit_id: i32,
    #[serde(with = "calendar_date")]
    pub date: Date,
}

impl From<RecordedEntry> for RecordedEntryResponse {
    fn from(entry: RecordedEntry) -> Self {
        Self {
            id: entry.id.as_i32(),
            habit_id: entry.habit_id.as_i32(),
            date: entry.date,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.as_i32(),
            name: user.name,
        }
    }
}
