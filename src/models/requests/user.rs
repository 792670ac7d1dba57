//! User-related request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::validate_not_blank;

/// Request payload for the "create user" form
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Display name
    #[validate(
        length(max = 100, message = "Name must be at most 100 characters."),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// Email address, stored lower-cased
    #[validate(email(message = "Invalid email."))]
    #[schema(example = "jane.doe@example.com")]
    pub email: String,
    /// Password (minimum 6 characters)
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    #[schema(example = "secret1")]
    pub password: String,
    /// Must repeat `password`
    #[schema(example = "secret1")]
    pub password_confirmation: String,
}
