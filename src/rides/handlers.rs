use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, info, instrument};

use crate::{
    api::Data,
    error::{AppError, INTERNAL},
    rides::{
        dto::CreateRideRequest,
        repo_types::{Ride, RideWithDriver},
    },
    state::AppState,
};

pub fn ride_routes() -> Router<AppState> {
    Router::new()
        .route("/api/rides", post(create_ride))
        .route("/api/user/:id/rides", get(list_user_rides))
}

#[instrument(skip(state, payload))]
pub async fn create_ride(
    State(state): State<AppState>,
    payload: Result<Json<CreateRideRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Data<Ride>>), AppError> {
    let Json(req) = payload?;
    let new_ride = req.validate()?;

    let ride = Ride::create(&state.db, &new_ride)
        .await
        .map_err(AppError::internal(INTERNAL))?;

    info!(ride_id = ride.ride_id, user_id = %ride.user_id, driver_id = ride.driver_id, "ride stored");
    Ok((StatusCode::CREATED, Json(Data::new(ride))))
}

#[instrument(skip(state))]
pub async fn list_user_rides(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Data<Vec<RideWithDriver>>>, AppError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::MissingFields(vec!["id"]));
    }

    let rides = Ride::list_for_user(&state.db, id)
        .await
        .map_err(AppError::internal(INTERNAL))?;

    debug!(user_id = %id, count = rides.len(), "rides fetched");
    Ok(Json(Data::new(rides)))
}
