#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    /// The request never completed; carries the transport error text.
    #[error("{0}")]
    Network(String),

    /// Non-2xx response; carries the server message or a per-call fallback.
    #[error("{0}")]
    Server(String),

    #[error("Request timed out after {0}ms")]
    Timeout(u32),

    #[error("Failed to parse response: {0}")]
    Data(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
