//! Form service backing the forms list and the "create form" modal.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;

use crate::constants::{CODE_INVALID_ID, ERR_INVALID_ID};
use crate::errors::ApiError;
use crate::models::{CreateFormRequest, Form, FormResponse};
use crate::pagination::{PaginationRequest, PaginationResult};
use crate::repositories::FormRepository;
use crate::services::seed;

pub struct FormService {
    repository: Arc<FormRepository>,
}

impl FormService {
    pub fn new(repository: Arc<FormRepository>) -> Self {
        Self { repository }
    }

    pub async fn seed(&self, count: usize) -> usize {
        let inserted = self
            .repository
            .insert_many(seed::generate_forms(count))
            .await;
        info!("Seeded {} forms", inserted);
        inserted
    }

    pub async fn list_forms(
        &self,
        page: i64,
        per_page: i64,
    ) -> Result<(Vec<FormResponse>, PaginationResult), ApiError> {
        let total = self.repository.count().await;
        let window = PaginationRequest::new(i64::try_from(total).unwrap_or(i64::MAX))
            .page_size(per_page)
            .current_page(page)
            .compute()?;

        debug!("Fetching forms page {} ({} per page)", page, per_page);
        let forms = self
            .repository
            .find_page(window.first_record_index() - 1, per_page as u64)
            .await
            .into_iter()
            .map(FormResponse::from)
            .collect();

        Ok((forms, window))
    }

    pub async fn get_form_by_id(&self, id: &str) -> Result<Option<Form>, ApiError> {
        let id = Uuid::parse_str(id)
            .map_err(|_| ApiError::bad_request(CODE_INVALID_ID, ERR_INVALID_ID))?;

        Ok(self.repository.find_by_id(id).await)
    }

    pub async fn create_form(&self, req: CreateFormRequest) -> Result<Form, ApiError> {
        let form = Form {
            id: Uuid::new_v4(),
            name: req.name.trim().to_string(),
            is_internal: req.is_internal,
            question_count: req.question_count,
            created_at: Utc::now(),
        };
        self.repository.insert(form.clone()).await;

        info!("Created form {} ({})", form.id, form.name);
        Ok(form)
    }
}
