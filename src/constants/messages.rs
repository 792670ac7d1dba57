//! Success message constants used throughout the application.

// User messages
pub const MSG_USER_FOUND: &str = "User found";
pub const MSG_USER_CREATED: &str = "User created successfully";

// Form messages
pub const MSG_FORM_FOUND: &str = "Form found";
pub const MSG_FORM_CREATED: &str = "Form created successfully";

// Dashboard messages
pub const MSG_DASHBOARD: &str = "Dashboard data";
pub const MSG_PAGINATION_WINDOW: &str = "Pagination window";

// Health
pub const MSG_SERVER_RUNNING: &str = "Server is running";
