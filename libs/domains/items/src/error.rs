use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_users::{UserError, UserId};
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::ItemId;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("User {user_id} is not the owner of item {item_id}")]
    AccessDenied { user_id: UserId, item_id: ItemId },

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    /// Raised while resolving the item owner
    #[error(transparent)]
    User(#[from] UserError),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(id) => AppError::NotFound(format!("Item {} not found", id)),
            ItemError::AccessDenied { user_id, item_id } => AppError::Forbidden(format!(
                "User {} is not the owner of item {}",
                user_id, item_id
            )),
            ItemError::Validation(errors) => AppError::ValidationError(errors),
            ItemError::User(err) => err.into(),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
