//! Log sanitization for personal data.
//!
//! Emails submitted through the "create user" form are masked before they
//! reach the logs.

/// Mask an email address for safe logging.
///
/// Keeps at most the first 3 characters of the local part, then asterisks and
/// the domain. Works on characters, so multi-byte names are never split.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
/// ```
pub fn mask_email(email: &str) -> String {
    let (local, domain) = match email.split_once('@') {
        Some((local, domain)) => (local, Some(domain)),
        None => (email, None),
    };

    let visible: String = local.chars().take(3).collect();
    match domain {
        Some(domain) => format!("{}***@{}", visible, domain),
        None => format!("{}***", visible),
    }
}
