use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub clerk_id: String, // id issued by the auth provider
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
