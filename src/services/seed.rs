//! Mock data generator for the in-memory store.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::models::{Form, User};

const FIRST_NAMES: [&str; 12] = [
    "Ana", "Bruno", "Carla", "Diego", "Elisa", "Felipe", "Gabriela", "Hugo", "Isabel", "Jonas",
    "Laura", "Marcos",
];
const LAST_NAMES: [&str; 10] = [
    "Silva", "Santos", "Oliveira", "Souza", "Lima", "Pereira", "Costa", "Almeida", "Ferreira",
    "Rocha",
];
const EMAIL_DOMAINS: [&str; 4] = ["example.com", "mail.test", "inbox.dev", "corp.local"];

/// Seeded records were created at most this many days ago.
const RECENT_DAYS: i64 = 10;

const MAX_SEEDED_QUESTIONS: u32 = 10;

fn recent_timestamp<R: Rng>(rng: &mut R) -> DateTime<Utc> {
    let seconds = rng.gen_range(0..RECENT_DAYS * 24 * 60 * 60);
    Utc::now() - Duration::seconds(seconds)
}

/// Generate `count` users named "User 1", "User 2", ...
///
/// Emails are random but carry the user's number so they never collide.
pub fn generate_users(count: usize) -> Vec<User> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| {
            let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("user");
            let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("mock");
            let domain = EMAIL_DOMAINS.choose(&mut rng).copied().unwrap_or("example.com");
            User {
                id: Uuid::new_v4(),
                name: format!("User {}", i + 1),
                email: format!("{}.{}{}@{}", first, last, i + 1, domain).to_lowercase(),
                password_hash: None,
                created_at: recent_timestamp(&mut rng),
            }
        })
        .collect()
}

/// Generate `count` internal forms named "Form 1", "Form 2", ...
pub fn generate_forms(count: usize) -> Vec<Form> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| Form {
            id: Uuid::new_v4(),
            name: format!("Form {}", i + 1),
            is_internal: true,
            question_count: rng.gen_range(0..MAX_SEEDED_QUESTIONS),
            created_at: recent_timestamp(&mut rng),
        })
        .collect()
}
