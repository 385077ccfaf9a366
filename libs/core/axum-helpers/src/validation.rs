//! Custom field validators shared by domain DTOs.

use std::borrow::Cow;
use validator::ValidationError;

/// Rejects strings that are empty or contain only whitespace.
///
/// Use with `#[validate(custom(function = "axum_helpers::validation::not_blank"))]`.
/// On `Option<String>` fields the check only runs when a value is present.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some(Cow::Borrowed("must not be blank"));
        return Err(error);
    }
    Ok(())
}
