use std::fmt;

/// Result type for blogdeck-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Post id was not a positive integer
    InvalidPostId(String),

    /// Search field name not one of title/content/tags
    UnknownSearchField(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPostId(raw) => write!(f, "Invalid post id: {}", raw),
            Error::UnknownSearchField(raw) => {
                write!(
                    f,
                    "Unknown search field '{}' (expected title, content or tags)",
                    raw
                )
            }
        }
    }
}

impl std::error::Error for Error {}
