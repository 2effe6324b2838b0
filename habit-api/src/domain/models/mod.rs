pub mod calendar_date;
mod habit;
mod ids;
mod user;

pub use calendar_date::{parse_calendar_date, CalendarDateError};
pub use habit::*;
pub use ids::*;
pub use user::*;
