//! Common validation utilities and helpers.

use validator::ValidationErrors;

use crate::constants::{CODE_PASSWORD_MISMATCH, ERR_PASSWORD_MISMATCH};
use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// Messages are sorted so responses are stable regardless of field order.
///
/// # Example
/// ```ignore
/// body.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let mut errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    errors.sort();
    ApiError::validation(errors)
}

/// Validate that the password confirmation matches the password.
pub fn validate_password_match(password: &str, confirmation: &str) -> Result<(), ApiError> {
    if password != confirmation {
        return Err(ApiError::bad_request(
            CODE_PASSWORD_MISMATCH,
            ERR_PASSWORD_MISMATCH,
        ));
    }
    Ok(())
}
