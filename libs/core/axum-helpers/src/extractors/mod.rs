//! Custom extractors for Axum handlers.
//!
//! These extractors reject malformed requests with the standard
//! [`ErrorResponse`](crate::errors::ErrorResponse) body instead of axum's
//! plain-text rejections.

pub mod id_path;
pub mod sharer_user;
pub mod validated_json;

pub use id_path::IdPath;
pub use sharer_user::{SHARER_USER_ID_HEADER, SharerUserId};
pub use validated_json::ValidatedJson;
