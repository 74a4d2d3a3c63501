use std::fmt;

/// Result type for blogdeck-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur talking to the posts backend
#[derive(Debug)]
pub enum Error {
    /// Connection, TLS or timeout failure before a response arrived
    Transport(reqwest::Error),

    /// Backend answered with a non-success status
    Api { status: u16, message: String },

    /// Requested post does not exist
    NotFound(String),

    /// Response body was not the expected JSON shape
    Decode(serde_json::Error),

    /// Request rejected before it was sent
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl Error {
    /// HTTP status, when the failure came from a backend response
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::NotFound(_) => Some(404),
            Error::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(err) => write!(f, "Transport error: {}", err),
            Error::Api { status, message } => write!(f, "API error ({}): {}", status, message),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::Decode(err) => write!(f, "Unexpected response body: {}", err),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) => Some(err),
            Error::Decode(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Api { .. } | Error::NotFound(_) | Error::InvalidInput(_) | Error::Config(_) => {
                None
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
