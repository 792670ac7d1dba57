//! Form-related response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Form;

/// Form data returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct FormResponse {
    pub id: Uuid,
    #[schema(example = "Form 1")]
    pub name: String,
    #[schema(example = true)]
    pub is_internal: bool,
    #[schema(example = 7)]
    pub question_count: u32,
    pub created_at: DateTime<Utc>,
}

impl From<Form> for FormResponse {
    fn from(form: Form) -> Self {
        Self {
            id: form.id,
            name: form.name,
            is_internal: form.is_internal,
            question_count: form.question_count,
            created_at: form.created_at,
        }
    }
}
