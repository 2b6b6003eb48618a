use anyhow::Context;
use sqlx::PgPool;

use crate::users::dto::NewUser;
use crate::users::repo_types::User;

impl User {
    /// Insert a user. Duplicate `clerk_id`s are left to the table constraints.
    pub async fn create(db: &PgPool, new: &NewUser) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, clerk_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, clerk_id, created_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.clerk_id)
        .fetch_all(db)
        .await
        .context("insert user")?;
        Ok(users)
    }
}
