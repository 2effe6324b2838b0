use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{HabitEntryResponse, HabitResponse},
    app_state::AppState,
    domain::{
        models::{HabitId, HabitUpdate, NewHabit, UserId},
        HabitError, HabitName,
    },
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:habit_id", put(update_habit).delete(delete_habit))
        .route("/:habit_id/entries", get(list_habit_entries))
}

// ============================================================================
// List Habits
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListHabitsQuery {
    #[serde(default)]
    include_inactive: bool,
}

#[instrument(name = "list_habits", skip(app_state))]
pub async fn list_habits(
    Path(user_id): Path<i32>,
    Query(query): Query<ListHabitsQuery>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<HabitResponse>>, ApiError> {
    let user_id = UserId::from(user_id);

    let habits = if query.include_inactive {
        app_state.habit_service.list_habits(&user_id).await?
    } else {
        app_state.habit_service.list_active_habits(&user_id).await?
    };

    Ok(Json(habits.into_iter().map(HabitResponse::from).collect()))
}

// ============================================================================
// Create Habit
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHabitPayload {
    name: String,
    colour: String,
}

#[instrument(name = "create_habit", skip(app_state))]
pub async fn create_habit(
    Path(user_id): Path<i32>,
    State(app_state): State<AppState>,
    Json(body): Json<CreateHabitPayload>,
) -> Result<(StatusCode, Json<HabitResponse>), ApiError> {
    let name = HabitName::try_from(body.name.as_str()).map_err(HabitError::from)?;

    let habit = app_state
        .habit_service
        .create_habit(&UserId::from(user_id), NewHabit::new(name, body.colour))
        .await?;

    Ok((StatusCode::CREATED, Json(HabitResponse::from(habit))))
}

// ============================================================================
// Edit Habits
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHabitPayload {
    name: String,
    colour: String,
    index: i32,
    active: bool,
}

impl TryFrom<UpdateHabitPayload> for HabitUpdate {
    type Error = HabitError;

    fn try_from(payload: UpdateHabitPayload) -> Result<Self, Self::Error> {
        let name = HabitName::try_from(payload.name.as_str())?;
        Ok(HabitUpdate::new(
            name,
            payload.colour,
            payload.index,
            payload.active,
        ))
    }
}

/// One element of a bulk edit; the same fields as a single edit plus the id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateHabitPayload {
    id: i32,
    #[serde(flatten)]
    habit: UpdateHabitPayload,
}

#[instrument(name = "update_habit", skip(app_state))]
pub async fn update_habit(
    Path(habit_id): Path<i32>,
    State(app_state): State<AppState>,
    Json(body): Json<UpdateHabitPayload>,
) -> Result<Json<HabitResponse>, ApiError> {
    let update = HabitUpdate::try_from(body)?;

    let habit = app_state
        .habit_service
        .update_habit(&HabitId::from(habit_id), update)
        .await?;

    Ok(Json(HabitResponse::from(habit)))
}

#[instrument(name = "update_habits", skip(app_state, body))]
pub async fn update_habits(
    Path(user_id): Path<i32>,
    State(app_state): State<AppState>,
    Json(body): Json<Vec<BulkUpdateHabitPayload>>,
) -> Result<Json<Vec<HabitResponse>>, ApiError> {
    let updates = body
        .into_iter()
        .map(|payload| -> Result<_, HabitError> {
            Ok((HabitId::from(payload.id), HabitUpdate::try_from(payload.habit)?))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let habits = app_state
        .habit_service
        .update_habits(&UserId::from(user_id), updates)
        .await?;

    Ok(Json(habits.into_iter().map(HabitResponse::from).collect()))
}

// ============================================================================
// Delete Habit
// ============================================================================

#[instrument(name = "delete_habit", skip(app_state))]
pub async fn delete_habit(
    Path(habit_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<HabitResponse>, ApiError> {
    let habit = app_state
        .habit_service
        .delete_habit(&HabitId::from(habit_id))
        .await?;

    Ok(Json(HabitResponse::from(habit)))
}

// ============================================================================
// Habit Entries
// ============================================================================

#[instrument(name = "list_habit_entries", skip(app_state))]
pub async fn list_habit_entries(
    Path(habit_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<HabitEntryResponse>>, ApiError> {
    let entries = app_state
        .habit_service
        .habit_entries(&HabitId::from(habit_id))
        .await?;

    Ok(Json(entries.into_iter().map(HabitEntryResponse::from).collect()))
}
