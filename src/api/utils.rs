//! API utility functions
//!
//! Contains helper functions used by API handlers for request validation.

use crate::api::posts::CreatePostRequest;
use crate::error::AppError;

/// Check whether a required text field counts as missing
///
/// Absent, `null` and empty values are missing. Whitespace-only text is
/// accepted as given.
pub fn is_missing(value: Option<&str>) -> bool {
    value.unwrap_or_default().is_empty()
}

/// Validate a create request
///
/// # Arguments
/// * `request` - Decoded request body
///
/// # Returns
/// * `Ok((title, content))` - Both fields are present
/// * `Err(AppError::MissingFields)` - Every missing field, `title` before `content`
pub fn validate_create_request(request: CreatePostRequest) -> Result<(String, String), AppError> {
    let missing: Vec<&'static str> = [
        ("title", request.title.as_deref()),
        ("content", request.content.as_deref()),
    ]
    .into_iter()
    .filter(|(_, value)| is_missing(*value))
    .map(|(name, _)| name)
    .collect();

    match (request.title, request.content) {
        (Some(title), Some(content)) if missing.is_empty() => Ok((title, content)),
        _ => Err(AppError::MissingFields(missing)),
    }
}
