use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("network error: {0}")]
    Network(String),
    #[error("backend returned {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Message shown to the user on the error page. Every failed load collapses
    /// into the same wording, the detail goes to the log.
    #[must_use]
    pub fn user_message(&self) -> String {
        "Failed to load league data from the server.".to_string()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Parse(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<&str> for AppError {
    fn from(e: &str) -> Self {
        Self::Other(e.to_string())
    }
}
