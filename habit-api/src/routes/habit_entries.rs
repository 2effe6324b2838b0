use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post},
    Json, Router,
};
use serde::Deserialize;
use time::Date;
use tracing::instrument;

use crate::{
    adapters::inbound::http::RecordedEntryResponse,
    app_state::AppState,
    domain::models::{calendar_date, HabitEntryId, HabitId},
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_habit_entry))
        .route("/:entry_id", delete(delete_habit_entry))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHabitEntryPayload {
    habit_id: i32,
    /// Date in YYYY-MM-DD format.
    #[serde(with = "calendar_date")]
    date: Date,
}

#[instrument(name = "create_habit_entry", skip(app_state))]
pub async fn create_habit_entry(
    State(app_state): State<AppState>,
    Json(body): Json<CreateHabitEntryPayload>,
) -> Result<(StatusCode, Json<RecordedEntryResponse>), ApiError> {
    let entry = app_state
        .habit_service
        .create_entry(&HabitId::from(body.habit_id), body.date)
        .await?;

    Ok((StatusCode::CREATED, Json(RecordedEntryResponse::from(entry))))
}

#[instrument(name = "delete_habit_entry", skip(app_state))]
pub async fn delete_habit_entry(
    Path(entry_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<RecordedEntryResponse>, ApiError> {
    let entry = app_state
        .habit_service
        .delete_entry(&HabitEntryId::from(entry_id))
        .await?;

    Ok(Json(RecordedEntryResponse::from(entry)))
}
