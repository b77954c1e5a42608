use thiserror::Error;

/// Errors returned by the API client.
///
/// Transport failures are kept distinct from HTTP-level errors so callers
/// can decide whether a failed call is worth retrying. The client itself
/// never retries.
#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("transport error: {message}")]
    Transport { message: String, timeout: bool },

    #[error("API error {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Api {
        status: u16,
        code: Option<String>,
        message: Option<String>,
    },

    #[error("decode error: {message}")]
    Decode { message: String },

    #[error("authentication error: {0}")]
    Authentication(#[from] AuthError),

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl ApiClientError {
    /// Whether the embedding application may reasonably retry the call.
    ///
    /// Transport failures and 5xx responses qualify; 4xx responses are a
    /// client mistake and do not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiClientError::Transport { .. } => true,
            ApiClientError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Whether the error was caused by the round-trip timeout elapsing.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiClientError::Transport { timeout: true, .. })
    }

    /// The HTTP status code, when the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ApiClientError>;

/// Authentication-specific errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid client credentials")]
    InvalidCredentials,

    #[error("token acquisition failed: {reason}")]
    TokenAcquisitionFailed { reason: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required configuration: {key}")]
    MissingRequired { key: String },

    #[error("invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}
