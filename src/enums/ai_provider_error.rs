use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AiProviderError {
    #[error("API Error: {0}")]
    ApiError(String),
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
    /// No credential was configured; raised before any request is sent.
    #[error("{provider} API key not set. Please set the {env_var} environment variable.")]
    MissingCredential { provider: String, env_var: String },
}

impl AiProviderError {
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => AiProviderError::AuthenticationError(body),
            429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", body)),
            _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, body)),
        }
    }
}
