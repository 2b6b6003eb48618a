use anyhow::Context;
use sqlx::PgPool;

use crate::rides::dto::NewRide;
use crate::rides::repo_types::{Ride, RideWithDriver, RideWithDriverRow};

impl Ride {
    pub async fn create(db: &PgPool, new: &NewRide) -> anyhow::Result<Ride> {
        let ride = sqlx::query_as::<_, Ride>(
            r#"
            INSERT INTO rides (
                origin_address, destination_address,
                origin_latitude, origin_longitude,
                destination_latitude, destination_longitude,
                ride_time, fare_price, payment_status,
                driver_id, user_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING ride_id, origin_address, destination_address,
                      origin_latitude, origin_longitude,
                      destination_latitude, destination_longitude,
                      ride_time, fare_price, payment_status,
                      driver_id, user_id, created_at
            "#,
        )
        .bind(&new.origin_address)
        .bind(&new.destination_address)
        .bind(new.origin_latitude)
        .bind(new.origin_longitude)
        .bind(new.destination_latitude)
        .bind(new.destination_longitude)
        .bind(new.ride_time)
        .bind(new.fare_price)
        .bind(&new.payment_status)
        .bind(new.driver_id)
        .bind(&new.user_id)
        .fetch_one(db)
        .await
        .context("insert ride")?;
        Ok(ride)
    }

    /// All rides of a user with their driver, newest first.
    pub async fn list_for_user(db: &PgPool, user_id: &str) -> anyhow::Result<Vec<RideWithDriver>> {
        let rows = sqlx::query_as::<_, RideWithDriverRow>(
            r#"
            SELECT r.ride_id, r.origin_address, r.destination_address,
                   r.origin_latitude, r.origin_longitude,
                   r.destination_latitude, r.destination_longitude,
                   r.ride_time, r.fare_price, r.payment_status, r.created_at,
                   d.id AS driver_id, d.first_name, d.last_name,
                   d.profile_image_url, d.car_image_url, d.car_seats, d.rating
              FROM rides r
             INNER JOIN drivers d ON r.driver_id = d.id
             WHERE r.user_id = $1
             ORDER BY r.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
        .context("list rides for user")?;

        Ok(rows.into_iter().map(RideWithDriver::from).collect())
    }
}
