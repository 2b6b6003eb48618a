use anyhow::Context;
use sqlx::PgPool;

use crate::drivers::repo_types::Driver;

impl Driver {
    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<Driver>> {
        let drivers = sqlx::query_as::<_, Driver>(
            r#"
            SELECT id, first_name, last_name, profile_image_url,
                   car_image_url, car_seats, rating
              FROM drivers
            "#,
        )
        .fetch_all(db)
        .await
        .context("list drivers")?;
        Ok(drivers)
    }
}
