use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Driver record in the database. Drivers are managed outside this service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: Option<String>,
    pub car_image_url: Option<String>,
    pub car_seats: i32,
    pub rating: Option<Decimal>,
}
