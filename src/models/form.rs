use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repositories::Record;

/// Form record held in the mock store
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Form {
    pub id: Uuid,
    pub name: String,
    /// Internal forms are only shown to staff
    pub is_internal: bool,
    pub question_count: u32,
    pub created_at: DateTime<Utc>,
}

impl Record for Form {
    fn id(&self) -> Uuid {
        self.id
    }
}
