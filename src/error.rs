use thiserror::Error;

/// Fatal preconditions checked before the server binds. The hosting entry
/// point decides whether to exit the process.
#[derive(Debug, Error)]
pub enum StartupError {
    /// A required environment variable is absent or blank
    #[error("required environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// The shared HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    ClientInit(#[from] reqwest::Error),
}

/// Per-call errors surfaced by the provider client facade.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider rejected the configured credentials outright
    #[error("provider rejected the configured credentials")]
    NoCredentials,

    /// The caller lacks permission for this specific operation. Only the
    /// optional dashboard stages recover from this class locally.
    #[error("access denied: {message}")]
    AccessDenied { message: String },

    /// Any other structured rejection from the provider
    #[error("provider error {code}: {message}")]
    Api { code: String, message: String },

    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with something we could not interpret
    #[error("unexpected provider response: {0}")]
    Unexpected(String),
}

/// Error surface of the dashboard aggregator. Exactly three kinds reach the
/// HTTP boundary, each rendered with its own error template.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("no valid cloud credentials")]
    NoCredentials,

    #[error("provider error {code}: {message}")]
    Api { code: String, message: String },

    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl From<ProviderError> for DashboardError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NoCredentials => DashboardError::NoCredentials,
            // Access denied on a load-bearing stage is an ordinary API
            // rejection as far as the boundary is concerned.
            ProviderError::AccessDenied { message } => DashboardError::Api {
                code: "AccessDenied".to_string(),
                message,
            },
            ProviderError::Api { code, message } => DashboardError::Api { code, message },
            ProviderError::Transport(e) => DashboardError::Unexpected(e.to_string()),
            ProviderError::Unexpected(msg) => DashboardError::Unexpected(msg),
        }
    }
}
