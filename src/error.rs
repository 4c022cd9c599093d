use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Failure of a single call to the upstream completion API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to upstream failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("upstream call exceeded the {}s timeout", .0.as_secs())]
    Timeout(Duration),

    #[error("upstream response contained no completion choices")]
    EmptyCompletion,
}

impl UpstreamError {
    /// Transient failures are worth another attempt; upstream 4xx means the
    /// request itself is bad and must not be replayed.
    pub fn is_retryable(&self) -> bool {
        match self {
            UpstreamError::Network(_) | UpstreamError::Timeout(_) => true,
            UpstreamError::Status { status, .. } => status.is_server_error(),
            UpstreamError::EmptyCompletion => false,
        }
    }
}

/// Startup configuration problems. All of these are fatal: the affected
/// listener must not start.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("upstream API key is empty; set CHAT_API_KEY")]
    MissingApiKey,

    #[error("TLS certificate path is not set; set TLS_CERT_PATH")]
    MissingCertificate,

    #[error("TLS private key path is not set; set TLS_KEY_PATH")]
    MissingKey,

    #[error("cannot read TLS certificate at {path}: {source}")]
    CertificateUnreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot read TLS private key at {path}: {source}")]
    KeyUnreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("static document root '{0}' is not a directory")]
    DocumentRootMissing(String),

    #[error("{0}")]
    Invalid(String),
}
