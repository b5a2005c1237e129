use reqwest::StatusCode;
use thiserror::Error;

/// Errors from the profile fetch path.
///
/// Variants are cloneable (transport failures carry a message rather than
/// the underlying `reqwest::Error`) so that coalesced callers awaiting the
/// same in-flight request can all receive the outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("no bearer token in session")]
    NotAuthenticated,

    #[error("profile request rejected with status {status}")]
    RequestRejected { status: StatusCode, body: String },

    #[error("network error: {0}")]
    Transport(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl FetchError {
    /// Truncate a response body to avoid carrying excessive data in errors
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        // The cut must land on a char boundary; walk back from the limit
        let mut cut = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..cut],
            body.len()
        )
    }

    /// Build a rejection error from a non-success HTTP status and its body
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        FetchError::RequestRejected {
            status,
            body: Self::truncate_body(body),
        }
    }

    /// The HTTP status attached to a rejection, if this error is one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::RequestRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}
