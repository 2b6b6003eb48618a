use serde::Deserialize;

use crate::{api::Required, error::AppError};

/// Request body for user registration.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub clerk_id: Option<String>,
}

/// Validated user registration.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub clerk_id: String,
}

impl CreateUserRequest {
    pub fn validate(self) -> Result<NewUser, AppError> {
        let mut required = Required::default();
        let fields = (
            required.text("name", self.name),
            required.text("email", self.email),
            required.text("clerkId", self.clerk_id),
        );

        match fields {
            (Some(name), Some(email), Some(clerk_id)) => Ok(NewUser {
                name,
                email,
                clerk_id,
            }),
            _ => Err(required.into_error()),
        }
    }
}
