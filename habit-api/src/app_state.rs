use std::sync::Arc;

use crate::domain::ports::inbound::{HabitService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub habit_service: Arc<dyn HabitService>,
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    pub fn new(habit_service: Arc<dyn HabitService>, user_service: Arc<dyn UserService>) -> Self {
        Self {
            habit_service,
            user_service,
        }
    }
}
