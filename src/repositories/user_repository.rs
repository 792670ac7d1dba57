//! User repository backed by the in-memory mock store.

use log::debug;
use uuid::Uuid;

use crate::models::User;
use crate::repositories::MockCollection;

/// Repository for user records.
#[derive(Default)]
pub struct UserRepository {
    collection: MockCollection<User>,
}

impl UserRepository {
    /// Create an empty UserRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user unless another user already has the same email
    /// (case-insensitive). Returns `None` when the email is taken.
    pub async fn insert_if_email_free(&self, user: User) -> Option<Uuid> {
        let email = user.email.to_lowercase();
        self.collection
            .insert_unless(|existing| existing.email.to_lowercase() == email, user)
            .await
    }

    /// Insert seeded users in order.
    pub async fn insert_many(&self, users: Vec<User>) -> usize {
        self.collection.insert_many(users).await
    }

    /// Find a user by id.
    pub async fn find_by_id(&self, id: Uuid) -> Option<User> {
        debug!("Repository: Finding user by ID: {}", id);
        self.collection.find_by_id(id).await
    }

    /// Find a user by email address (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let email = email.to_lowercase();
        self.collection
            .find_first(|user| user.email.to_lowercase() == email)
            .await
    }

    /// Count all users.
    pub async fn count(&self) -> u64 {
        self.collection.count().await
    }

    /// Users in insertion order, starting at `skip`.
    pub async fn find_page(&self, skip: u64, limit: u64) -> Vec<User> {
        debug!("Repository: Finding users skip={} limit={}", skip, limit);
        self.collection.page(skip, limit).await
    }
}
