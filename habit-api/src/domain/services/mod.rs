mod habits;
mod users;

pub use habits::HabitServiceImpl;
pub use users::UserServiceImpl;
