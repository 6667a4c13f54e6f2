//! Errors of the data sources, and the notices the planner shows in their place

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// An error returned by a [`TodoSource`](crate::traits::TodoSource)
#[derive(Debug, Error)]
pub enum SourceError {
    /// The request could not be sent, or its response could not be read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a status this operation does not accept
    #[error("Unexpected HTTP status code {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// This URL cannot have path segments appended to it
    #[error("URL {0} cannot be used as a base URL")]
    NotABase(url::Url),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A failure injected by a [`MockBehaviour`](crate::mock_behaviour::MockBehaviour)
    #[error("Mocked failure: {0}")]
    Mocked(String),
}

/// An error when editing a draft
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Unknown field {0:?}")]
    UnknownField(String),

    #[error("Unknown status {0:?}")]
    UnknownStatus(String),
}


/// The message the planner displays to the user.
///
/// These are fixed texts: the underlying errors are only logged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    FetchFailed,
    FillInAllFields,
    SaveFailed,
    DeleteFailed,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::FetchFailed => "Failed to fetch todos.",
            Notice::FillInAllFields => "Please fill in all fields.",
            Notice::SaveFailed => "Failed to save the task.",
            Notice::DeleteFailed => "Failed to delete the task.",
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}
