use thiserror::Error;

/// Errors that can occur when configuring a paginated view.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListingError {
    #[error("Page size must be greater than zero")]
    ZeroPageSize,

    #[error("This list has no categories; only \"all\" is accepted (got \"{0}\")")]
    UncategorizedList(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_error_display() {
        assert_eq!(
            ListingError::ZeroPageSize.to_string(),
            "Page size must be greater than zero"
        );
        assert_eq!(
            ListingError::UncategorizedList("public".to_string()).to_string(),
            "This list has no categories; only \"all\" is accepted (got \"public\")"
        );
    }
}
