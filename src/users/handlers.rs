use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    api::Data,
    error::{AppError, INTERNAL},
    state::AppState,
    users::{dto::CreateUserRequest, repo_types::User},
};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/api/user", post(create_user))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Data<Vec<User>>>), AppError> {
    let Json(req) = payload?;
    let new_user = req.validate()?;

    let users = User::create(&state.db, &new_user)
        .await
        .map_err(AppError::internal(INTERNAL))?;

    info!(clerk_id = %new_user.clerk_id, "user created");
    Ok((StatusCode::CREATED, Json(Data::new(users))))
}
