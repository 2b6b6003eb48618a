use crate::state::AppState;
use axum::Router;

pub mod handlers;
mod repo;
pub mod repo_types;

pub fn router() -> Router<AppState> {
    handlers::driver_routes()
}
