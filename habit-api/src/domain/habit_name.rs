use std::fmt;
use std::ops::Deref;
use thiserror::Error;

/// A habit display name, normalized to title case.
///
/// Surrounding whitespace is trimmed, runs of inner whitespace collapse to a
/// single space and every word is capitalized with the remainder lowercased,
/// so `"  drink   WATER "` becomes `"Drink Water"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HabitName(String);

#[derive(Error, Debug, PartialEq)]
pub enum HabitNameError {
    #[error("habit name must not be empty")]
    Empty,
}

impl TryFrom<&str> for HabitName {
    type Error = HabitNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value
            .split_whitespace()
            .map(title_case_word)
            .collect::<Vec<_>>()
            .join(" ");

        if normalized.is_empty() {
            return Err(HabitNameError::Empty);
        }

        Ok(Self(normalized))
    }
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

impl Deref for HabitName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for HabitName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HabitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
