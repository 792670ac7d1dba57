//! Form repository backed by the in-memory mock store.

use log::debug;
use uuid::Uuid;

use crate::models::Form;
use crate::repositories::MockCollection;

/// Repository for form records.
#[derive(Default)]
pub struct FormRepository {
    collection: MockCollection<Form>,
}

impl FormRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, form: Form) -> Uuid {
        self.collection.insert(form).await
    }

    pub async fn insert_many(&self, forms: Vec<Form>) -> usize {
        self.collection.insert_many(forms).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<Form> {
        debug!("Repository: Finding form by ID: {}", id);
        self.collection.find_by_id(id).await
    }

    pub async fn count(&self) -> u64 {
        self.collection.count().await
    }

    pub async fn find_page(&self, skip: u64, limit: u64) -> Vec<Form> {
        debug!("Repository: Finding forms skip={} limit={}", skip, limit);
        self.collection.page(skip, limit).await
    }
}
