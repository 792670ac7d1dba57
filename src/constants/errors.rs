//! Error message constants used throughout the application.

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_EMAIL_EXISTS: &str = "Email already registered";

// Form errors
pub const ERR_FORM_NOT_FOUND: &str = "Form not found";

// Validation errors
pub const ERR_INVALID_ID: &str = "Invalid ID format";
pub const ERR_NAME_REQUIRED: &str = "Name is required.";
pub const ERR_PASSWORD_MISMATCH: &str = "Passwords must match.";
