use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Song not found: {0}")]
    SongNotFound(String),

    #[error("Alias not found: {0}")]
    AliasNotFound(String),

    #[error("Cover not found for song {0}")]
    CoverNotFound(String),

    #[error("Alias provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Malformed arguments ({reason})\n{usage}")]
    MalformedArguments { usage: &'static str, reason: String },

    #[error("A guessing game is running in {0}")]
    GuessInProgress(String),

    #[error("Empty query")]
    EmptyQuery,

    #[error("Invalid catalog entry {id}: {message}")]
    InvalidCatalog { id: String, message: String },

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed(usage: &'static str, reason: impl Into<String>) -> Self {
        Error::MalformedArguments {
            usage,
            reason: reason.into(),
        }
    }

    /// Whether the error only means "nothing matched" rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::SongNotFound(_) | Error::AliasNotFound(_) | Error::CoverNotFound(_)
        )
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        let message = if e.is_timeout() {
            format!("Request timed out: {}", e)
        } else if e.is_connect() {
            format!("Connection failed: {}", e)
        } else if let Some(status) = e.status() {
            format!("HTTP {} error: {}", status.as_u16(), e)
        } else {
            format!("HTTP error: {}", e)
        };
        Error::Http(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(Error::SongNotFound("8".into()).is_not_found());
        assert!(Error::AliasNotFound("x".into()).is_not_found());
        assert!(!Error::EmptyQuery.is_not_found());
        assert!(!Error::ProviderUnavailable("down".into()).is_not_found());
    }

    #[test]
    fn test_malformed_message_carries_usage() {
        let err = Error::malformed("usage: base <ds>", "expected a number");
        let msg = err.to_string();
        assert!(msg.contains("expected a number"));
        assert!(msg.contains("usage: base <ds>"));
    }
}
