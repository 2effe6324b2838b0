//! Composition root: wires concrete adapters into the domain services.
//!
//! This is the ONLY place that imports concrete outbound adapters.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    adapters::outbound::postgres::{
        PostgresHabitAdapter, PostgresHabitEntryAdapter, PostgresUserAdapter,
    },
    app_state::AppState,
    domain::services::{HabitServiceImpl, UserServiceImpl},
    repositories::{HabitEntryRepositoryImpl, HabitRepositoryImpl, UserRepositoryImpl},
};

/// Build the application state backed by PostgreSQL.
pub fn create_app_state(pool: PgPool) -> AppState {
    let habits = PostgresHabitAdapter::new(Arc::new(HabitRepositoryImpl::new(pool.clone())));
    let entries =
        PostgresHabitEntryAdapter::new(Arc::new(HabitEntryRepositoryImpl::new(pool.clone())));
    let users = PostgresUserAdapter::new(Arc::new(UserRepositoryImpl::new(pool)));

    let habit_service = HabitServiceImpl::new(Arc::new(habits), Arc::new(entries));
    let user_service = UserServiceImpl::new(Arc::new(users));

    AppState::new(Arc::new(habit_service), Arc::new(user_service))
}
