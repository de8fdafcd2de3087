use crate::errors::AppError;

/// Parses a path segment as a positive integer row id.
pub fn valid_id(id: &str) -> Result<i32, AppError> {
    id.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::invalid_field("id", "Invalid ID"))
}
