use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::UserResponse,
    app_state::AppState,
    routes::{habits, ApiError},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/:user_id/habits",
            get(habits::list_habits)
                .post(habits::create_habit)
                .put(habits::update_habits),
        )
}

#[instrument(name = "list_users", skip(app_state))]
async fn list_users(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = app_state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[derive(Debug, Deserialize)]
pub struct CreateUserPayload {
    name: String,
}

#[instrument(name = "create_user", skip(app_state))]
async fn create_user(
    State(app_state): State<AppState>,
    Json(body): Json<CreateUserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = app_state.user_service.create_user(&body.name).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
