//! Failures the client absorbs before falling back to local replies.

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Connection, DNS or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered outside the 2xx range.
    #[error("backend returned HTTP {0}")]
    Status(StatusCode),

    /// Body could not be decoded as a chat response.
    #[error("malformed response body: {0}")]
    Malformed(#[source] reqwest::Error),

    /// Success payload without a required field.
    #[error("response is missing `{0}`")]
    MissingField(&'static str),

    /// Backend reported `status: "error"`.
    #[error("backend error: {0}")]
    Backend(String),
}

impl ClientError {
    /// Stable label for log fields.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Status(_) => "http_status",
            Self::Malformed(_) | Self::MissingField(_) => "malformed",
            Self::Backend(_) => "backend_error",
        }
    }
}
