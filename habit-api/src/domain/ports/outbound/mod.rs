mod habit_entry_store;
mod habit_store;
#[cfg(test)]
mod mock;
mod user_store;

pub use habit_entry_store::*;
pub use habit_store::*;
#[cfg(test)]
pub use mock::MockHabitStore;
pub use user_store::*;
