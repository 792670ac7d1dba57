use std::fmt;

/// Failure raised when the calculator is handed inputs outside its domain.
///
/// Callers are expected to validate user-supplied values first, so this
/// usually points at a logic error rather than a recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    InvalidArgument(String),
}

impl PaginationError {
    pub(crate) fn invalid_argument(name: &str, value: i64, requirement: &str) -> Self {
        PaginationError::InvalidArgument(format!("{} {} (got {})", name, requirement, value))
    }
}

impl fmt::Display for PaginationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaginationError::InvalidArgument(message) => {
                write!(f, "Invalid argument: {}", message)
            }
        }
    }
}

impl std::error::Error for PaginationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_argument_and_value() {
        let err = PaginationError::invalid_argument("page_size", 0, "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid argument: page_size must be greater than zero (got 0)"
        );
    }
}
