use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{error::AppError, state::AppState};

const ROUTE_FAILED: &str = "Failed to fetch route";

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub fn route_routes() -> Router<AppState> {
    Router::new().route("/api/route", get(get_route))
}

#[instrument(skip(state))]
pub async fn get_route(
    State(state): State<AppState>,
    Query(q): Query<RouteQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(origin), Some(destination)) = (present(&q.origin), present(&q.destination)) else {
        let mut missing = Vec::new();
        if present(&q.origin).is_none() {
            missing.push("origin");
        }
        if present(&q.destination).is_none() {
            missing.push("destination");
        }
        return Err(AppError::MissingFields(missing));
    };

    let Some(provider) = state.directions.as_ref() else {
        return Err(AppError::internal(ROUTE_FAILED)(anyhow::anyhow!(
            "directions provider not configured"
        )));
    };

    let body = provider
        .directions(origin, destination)
        .await
        .map_err(AppError::internal(ROUTE_FAILED))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
