use axum::{extract::State, routing::get, Json, Router};
use tracing::{debug, instrument};

use crate::{
    api::Data,
    drivers::repo_types::Driver,
    error::{AppError, INTERNAL},
    state::AppState,
};

pub fn driver_routes() -> Router<AppState> {
    Router::new().route("/api/drivers", get(list_drivers))
}

#[instrument(skip(state))]
pub async fn list_drivers(
    State(state): State<AppState>,
) -> Result<Json<Data<Vec<Driver>>>, AppError> {
    let drivers = Driver::list_all(&state.db)
        .await
        .map_err(AppError::internal(INTERNAL))?;
    debug!(count = drivers.len(), "drivers fetched");
    Ok(Json(Data::new(drivers)))
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use rust_decimal::Decimal;

    use super::*;

    #[tokio::test]
    async fn database_failure_is_500() {
        let res = list_drivers(State(AppState::fake())).await.into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn driver_serializes_with_table_column_names() {
        let driver = Driver {
            id: 1,
            first_name: "James".into(),
            last_name: "Wilson".into(),
            profile_image_url: None,
            car_image_url: Some("https://img.example/car.png".into()),
            car_seats: 4,
            rating: Some(Decimal::new(480, 2)),
        };
        let json = serde_json::to_value(Data::new(vec![driver])).unwrap();
        assert_eq!(json["data"][0]["id"], 1);
        assert_eq!(json["data"][0]["car_seats"], 4);
        assert_eq!(json["data"][0]["rating"], "4.80");
        assert!(json["data"][0]["profile_image_url"].is_null());
    }
}
