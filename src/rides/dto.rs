use rust_decimal::Decimal;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{api::Required, error::AppError};

/// Request body for storing a booked ride.
///
/// Everything is optional here so that absent fields become a 400 with the
/// usual message rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateRideRequest {
    pub origin_address: Option<String>,
    pub destination_address: Option<String>,
    pub origin_latitude: Option<Decimal>,
    pub origin_longitude: Option<Decimal>,
    pub destination_latitude: Option<Decimal>,
    pub destination_longitude: Option<Decimal>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub ride_time: Option<OffsetDateTime>,
    pub fare_price: Option<Decimal>,
    pub payment_status: Option<String>,
    pub driver_id: Option<i32>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRide {
    pub origin_address: String,
    pub destination_address: String,
    pub origin_latitude: Decimal,
    pub origin_longitude: Decimal,
    pub destination_latitude: Decimal,
    pub destination_longitude: Decimal,
    pub ride_time: OffsetDateTime,
    pub fare_price: Decimal,
    pub payment_status: String,
    pub driver_id: i32,
    pub user_id: String,
}

impl CreateRideRequest {
    pub fn validate(self) -> Result<NewRide, AppError> {
        let mut required = Required::default();
        let fields = (
            required.text("origin_address", self.origin_address),
            required.text("destination_address", self.destination_address),
            required.value("origin_latitude", self.origin_latitude),
            required.value("origin_longitude", self.origin_longitude),
            required.value("destination_latitude", self.destination_latitude),
            required.value("destination_longitude", self.destination_longitude),
            required.value("ride_time", self.ride_time),
            required.value("fare_price", self.fare_price),
            required.text("payment_status", self.payment_status),
            required.value("driver_id", self.driver_id),
            required.text("user_id", self.user_id),
        );

        match fields {
            (
                Some(origin_address),
                Some(destination_address),
                Some(origin_latitude),
                Some(origin_longitude),
                Some(destination_latitude),
                Some(destination_longitude),
                Some(ride_time),
                Some(fare_price),
                Some(payment_status),
                Some(driver_id),
                Some(user_id),
            ) => Ok(NewRide {
                origin_address,
                destination_address,
                origin_latitude,
                origin_longitude,
                destination_latitude,
                destination_longitude,
                ride_time,
                fare_price,
                payment_status,
                driver_id,
                user_id,
            }),
            _ => Err(required.into_error()),
        }
    }
}
