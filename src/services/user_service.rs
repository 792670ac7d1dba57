//! User service for listing, lookup, and creation.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::constants::{CODE_EMAIL_EXISTS, CODE_INVALID_ID, ERR_EMAIL_EXISTS, ERR_INVALID_ID};
use crate::errors::ApiError;
use crate::models::{CreateUserRequest, User, UserResponse};
use crate::pagination::{PaginationRequest, PaginationResult};
use crate::repositories::UserRepository;
use crate::services::seed;
use crate::utils::mask_email;
use crate::validators::validate_password_match;

pub struct UserService {
    repository: Arc<UserRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(repository: Arc<UserRepository>, bcrypt_cost: u32) -> Self {
        Self {
            repository,
            bcrypt_cost,
        }
    }

    /// Fill the store with `count` generated users.
    pub async fn seed(&self, count: usize) -> usize {
        let inserted = self
            .repository
            .insert_many(seed::generate_users(count))
            .await;
        info!("Seeded {} users", inserted);
        inserted
    }

    /// One page of users plus the page window describing it.
    pub async fn list_users(
        &self,
        page: i64,
        per_page: i64,
    ) -> Result<(Vec<UserResponse>, PaginationResult), ApiError> {
        let total = self.repository.count().await;
        let window = PaginationRequest::new(i64::try_from(total).unwrap_or(i64::MAX))
            .page_size(per_page)
            .current_page(page)
            .compute()?;

        let skip = window.first_record_index() - 1;
        debug!("Fetching users page {} ({} per page)", page, per_page);

        let users = self
            .repository
            .find_page(skip, per_page as u64)
            .await
            .into_iter()
            .map(UserResponse::from)
            .collect();

        Ok((users, window))
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<Option<User>, ApiError> {
        debug!("Fetching user by ID: {}", id);
        let id = Uuid::parse_str(id)
            .map_err(|_| ApiError::bad_request(CODE_INVALID_ID, ERR_INVALID_ID))?;

        Ok(self.repository.find_by_id(id).await)
    }

    pub async fn create_user(&self, req: CreateUserRequest) -> Result<User, ApiError> {
        validate_password_match(&req.password, &req.password_confirmation).inspect_err(|_| {
            warn!("Create user failed: password confirmation does not match");
        })?;

        let email = req.email.trim().to_lowercase();
        if self.repository.find_by_email(&email).await.is_some() {
            warn!("Create user failed: {} already registered", mask_email(&email));
            return Err(ApiError::conflict(CODE_EMAIL_EXISTS, ERR_EMAIL_EXISTS));
        }

        let password_hash = bcrypt::hash(&req.password, self.bcrypt_cost)?;

        let user = User {
            id: Uuid::new_v4(),
            name: req.name.trim().to_string(),
            email,
            password_hash: Some(password_hash),
            created_at: Utc::now(),
        };
        // Re-checked under the write lock: another create may have won while hashing.
        if self.repository.insert_if_email_free(user.clone()).await.is_none() {
            warn!("Create user failed: {} already registered", mask_email(&user.email));
            return Err(ApiError::conflict(CODE_EMAIL_EXISTS, ERR_EMAIL_EXISTS));
        }

        info!("Created user {} ({})", user.id, mask_email(&user.email));
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CODE_INVALID_ARGUMENT, CODE_PASSWORD_MISMATCH};

    async fn seeded_service(count: usize) -> UserService {
        let service = UserService::new(Arc::new(UserRepository::new()), 4);
        service.seed(count).await;
        service
    }

    fn create_request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: "  Jane Doe ".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
            password_confirmation: "secret1".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_list_users_slices_by_page() {
        let service = seeded_service(95).await;

        let (users, window) = service.list_users(5, 10).await.unwrap();
        assert_eq!(users.len(), 10);
        assert_eq!(users[0].name, "User 41");
        assert_eq!(users[9].name, "User 50");
        assert_eq!(window.page_numbers(), &[1, 4, 5, 6, 9]);

        // The partial page past the floored last page is still served.
        let (users, window) = service.list_users(10, 10).await.unwrap();
        assert_eq!(users.len(), 5);
        assert_eq!(window.range_label(), "91–95 of 95");

        let (users, _) = service.list_users(20, 10).await.unwrap();
        assert!(users.is_empty());
    }

    #[actix_web::test]
    async fn test_list_users_rejects_invalid_page() {
        let service = seeded_service(5).await;
        let err = service.list_users(0, 10).await.unwrap_err();
        assert_eq!(err.code(), CODE_INVALID_ARGUMENT);
        let err = service.list_users(1, 0).await.unwrap_err();
        assert_eq!(err.code(), CODE_INVALID_ARGUMENT);
    }

    #[actix_web::test]
    async fn test_create_user_hashes_and_normalizes() {
        let service = seeded_service(0).await;
        let user = service
            .create_user(create_request("Jane.Doe@Example.com"))
            .await
            .unwrap();

        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "jane.doe@example.com");
        let hash = user.password_hash.clone().unwrap();
        assert!(bcrypt::verify("secret1", &hash).unwrap());

        let found = service
            .get_user_by_id(&user.id.to_string())
            .await
            .unwrap();
        assert_eq!(found, Some(user));
    }

    #[actix_web::test]
    async fn test_create_user_rejects_duplicate_email() {
        let service = seeded_service(0).await;
        service
            .create_user(create_request("jane@example.com"))
            .await
            .unwrap();
        let err = service
            .create_user(create_request("JANE@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), CODE_EMAIL_EXISTS);
    }

    #[test]
    fn test_concurrent_creates_with_same_email_admit_one() {
        use std::sync::Barrier;
        use std::thread;

        let service = Arc::new(UserService::new(Arc::new(UserRepository::new()), 4));
        let barrier = Arc::new(Barrier::new(2));

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let service = Arc::clone(&service);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    actix_web::rt::System::new().block_on(async move {
                        barrier.wait();
                        service.create_user(create_request("dup@example.com")).await
                    })
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        let err = results.into_iter().find_map(Result::err).unwrap();
        assert_eq!(err.code(), CODE_EMAIL_EXISTS);

        let count = actix_web::rt::System::new().block_on(service.repository.count());
        assert_eq!(count, 1);
    }

    #[actix_web::test]
    async fn test_create_user_rejects_mismatched_confirmation() {
        let service = seeded_service(0).await;
        let mut req = create_request("jane@example.com");
        req.password_confirmation = "secret2".to_string();
        let err = service.create_user(req).await.unwrap_err();
        assert_eq!(err.code(), CODE_PASSWORD_MISMATCH);
    }

    #[actix_web::test]
    async fn test_get_user_by_id_rejects_malformed_id() {
        let service = seeded_service(1).await;
        let err = service.get_user_by_id("not-a-uuid").await.unwrap_err();
        assert_eq!(err.code(), CODE_INVALID_ID);
        assert!(service
            .get_user_by_id(&Uuid::new_v4().to_string())
            .await
            .unwrap()
            .is_none());
    }
}
