mod dto;
pub mod gateway;
pub mod handlers;
mod services;
pub mod stripe;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::payment_routes()
}
