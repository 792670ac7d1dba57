//! Form-related request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::validate_not_blank;

fn default_is_internal() -> bool {
    true
}

/// Request payload for the "create form" modal
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFormRequest {
    /// Form title
    #[validate(
        length(max = 100, message = "Name must be at most 100 characters."),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "Customer survey")]
    pub name: String,
    /// Whether the form is internal (default: true)
    #[serde(default = "default_is_internal")]
    #[schema(example = true)]
    pub is_internal: bool,
    /// Number of questions (0-100, default: 0)
    #[serde(default)]
    #[validate(range(max = 100, message = "Question count must be between 0 and 100."))]
    #[schema(example = 5)]
    pub question_count: u32,
}
