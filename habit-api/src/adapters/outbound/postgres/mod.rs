mod habit_entries;
mod habits;
mod users;

pub use habit_entries::PostgresHabitEntryAdapter;
pub use habits::PostgresHabitAdapter;
pub use users::PostgresUserAdapter;
