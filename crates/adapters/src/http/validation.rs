use super::error::ApiError;

/// Maximum allowed length for name, city, zip and phone fields.
pub const MAX_SHORT_STRING_LENGTH: usize = 128;

/// Maximum allowed length for address and email fields.
pub const MAX_LONG_STRING_LENGTH: usize = 512;

/// Validate that a string field does not exceed `max_len` bytes.
pub fn validate_string_length(
    field_name: &str,
    value: &str,
    max_len: usize,
) -> Result<(), ApiError> {
    if value.len() > max_len {
        return Err(ApiError::BadRequest {
            code: "VALIDATION_ERROR",
            message: format!(
                "{field_name} exceeds maximum length of {max_len} characters (got {})",
                value.len()
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_length() {
        assert!(validate_string_length("firstName", "John", MAX_SHORT_STRING_LENGTH).is_ok());
    }

    #[test]
    fn rejects_oversized_string() {
        let long = "x".repeat(MAX_SHORT_STRING_LENGTH + 1);
        assert!(validate_string_length("firstName", &long, MAX_SHORT_STRING_LENGTH).is_err());
    }

    #[test]
    fn exactly_at_limit_is_ok() {
        let exact = "x".repeat(MAX_SHORT_STRING_LENGTH);
        assert!(validate_string_length("firstName", &exact, MAX_SHORT_STRING_LENGTH).is_ok());
    }
}
