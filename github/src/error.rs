use thiserror::Error;

pub type GithubResult<T> = Result<T, GithubError>;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response body: {reason}")]
    Decode { reason: String }
}

impl GithubError {
    pub(crate) fn decode(reason: impl ToString) -> Self {
        Self::Decode {
            reason: reason.to_string()
        }
    }
}

impl From<base64::DecodeError> for GithubError {
    fn from(e: base64::DecodeError) -> Self {
        Self::decode(e)
    }
}

impl From<std::string::FromUtf8Error> for GithubError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        Self::decode(e)
    }
}

impl From<chrono::ParseError> for GithubError {
    fn from(e: chrono::ParseError) -> Self {
        Self::decode(e)
    }
}
