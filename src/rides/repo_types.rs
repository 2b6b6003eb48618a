use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Ride record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ride {
    pub ride_id: i32,
    pub origin_address: String,
    pub destination_address: String,
    pub origin_latitude: Decimal,
    pub origin_longitude: Decimal,
    pub destination_latitude: Decimal,
    pub destination_longitude: Decimal,
    #[serde(with = "time::serde::rfc3339")]
    pub ride_time: OffsetDateTime,
    pub fare_price: Decimal,
    pub payment_status: String,
    pub driver_id: i32,
    pub user_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// One row of the rides joined with drivers history query.
#[derive(Debug, FromRow)]
pub struct RideWithDriverRow {
    pub ride_id: i32,
    pub origin_address: String,
    pub destination_address: String,
    pub origin_latitude: Decimal,
    pub origin_longitude: Decimal,
    pub destination_latitude: Decimal,
    pub destination_longitude: Decimal,
    pub ride_time: OffsetDateTime,
    pub fare_price: Decimal,
    pub payment_status: String,
    pub created_at: OffsetDateTime,
    pub driver_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: Option<String>,
    pub car_image_url: Option<String>,
    pub car_seats: i32,
    pub rating: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct RideDriver {
    pub driver_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: Option<String>,
    pub car_image_url: Option<String>,
    pub car_seats: i32,
    pub rating: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct RideWithDriver {
    pub ride_id: i32,
    pub origin_address: String,
    pub destination_address: String,
    pub origin_latitude: Decimal,
    pub origin_longitude: Decimal,
    pub destination_latitude: Decimal,
    pub destination_longitude: Decimal,
    #[serde(with = "time::serde::rfc3339")]
    pub ride_time: OffsetDateTime,
    pub fare_price: Decimal,
    pub payment_status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub driver: RideDriver,
}

impl From<RideWithDriverRow> for RideWithDriver {
    fn from(r: RideWithDriverRow) -> Self {
        Self {
            ride_id: r.ride_id,
            origin_address: r.origin_address,
            destination_address: r.destination_address,
            origin_latitude: r.origin_latitude,
            origin_longitude: r.origin_longitude,
            destination_latitude: r.destination_latitude,
            destination_longitude: r.destination_longitude,
            ride_time: r.ride_time,
            fare_price: r.fare_price,
            payment_status: r.payment_status,
            created_at: r.created_at,
            driver: RideDriver {
                driver_id: r.driver_id,
                first_name: r.first_name,
                last_name: r.last_name,
                profile_image_url: r.profile_image_url,
                car_image_url: r.car_image_url,
                car_seats: r.car_seats,
                rating: r.rating,
            },
        }
    }
}
