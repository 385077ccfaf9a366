use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Store-assigned user identifier
pub type UserId = i64;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, assigned on creation and never reused
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Email address (unique, compared exactly)
    pub email: String,
}

/// User as returned over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// DTO for registering a new user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(custom(function = "axum_helpers::validation::not_blank"), length(max = 255))]
    pub name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
}

/// Partial update; `None` (missing or `null`) leaves the field unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(custom(function = "axum_helpers::validation::not_blank"), length(max = 255))]
    pub name: Option<String>,
    #[validate(email, length(max = 255))]
    pub email: Option<String>,
}

impl UpdateUser {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

impl User {
    pub fn new(id: UserId, input: CreateUser) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
        }
    }

    /// Apply the fields present in `update`
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
    }
}
