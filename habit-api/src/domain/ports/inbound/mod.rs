mod habits;
mod users;

pub use habits::*;
pub use users::*;
