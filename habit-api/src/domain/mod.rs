mod error;
mod habit_name;
pub mod models;
pub mod ports;
pub mod services;
pub mod streak;

pub use error::*;
pub use habit_name::*;
