use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Upstream request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Upstream returned {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("Malformed upstream payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unexpected upstream payload: {message}")]
    UnexpectedPayload { message: String },

    #[error("Profile store error: {message}")]
    Store { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ProxyError {
    /// True for failures talking to the upstream API (network, status, body).
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            ProxyError::Fetch(_)
                | ProxyError::UpstreamStatus { .. }
                | ProxyError::Parse(_)
                | ProxyError::UnexpectedPayload { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;
