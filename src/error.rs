/// Status codes reported by the upstream query service and the shared error
/// type every component returns.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Status attached to every upstream response.
///
/// Carried next to the payload, never inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    Ok,
    FileNotFound,
    UnknownError,
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusCode::Ok => "OK",
            StatusCode::FileNotFound => "FILE_NOT_FOUND",
            StatusCode::UnknownError => "UNKNOWN_ERROR",
        };
        f.write_str(s)
    }
}

/// Errors surfaced by the rendering core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowseError {
    /// Upstream says the file, symbol or directory does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Upstream failed for an unspecified reason. Never retried here.
    #[error("upstream failure: {0}")]
    UpstreamFailure(StatusCode),

    /// Annotated markup is not well formed, or a required attribute is
    /// missing or has the wrong shape.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

pub type Result<T> = std::result::Result<T, BrowseError>;

impl From<quick_xml::Error> for BrowseError {
    fn from(e: quick_xml::Error) -> Self {
        BrowseError::MalformedInput(e.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for BrowseError {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        BrowseError::MalformedInput(e.to_string())
    }
}

/// Map an upstream status to `Ok(())` or the matching error.
///
/// `what` names the requested resource and only feeds the `NotFound` message.
pub fn check_status(status: StatusCode, what: &str) -> Result<()> {
    match status {
        StatusCode::Ok => Ok(()),
        StatusCode::FileNotFound => Err(BrowseError::NotFound(what.to_string())),
        other => Err(BrowseError::UpstreamFailure(other)),
    }
}

/// An upstream response: a status plus the payload it guards.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Upstream<T> {
    pub status: StatusCode,
    /// Missing in failure responses; serde reads an absent `Option` as `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
}

impl<T> Upstream<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            status: StatusCode::Ok,
            payload: Some(payload),
        }
    }

    pub fn failed(status: StatusCode) -> Self {
        Self {
            status,
            payload: None,
        }
    }

    /// Check the status and hand back the payload.
    ///
    /// An `OK` response without a payload is an upstream contract violation
    /// and reported as `MalformedInput`.
    pub fn into_result(self, what: &str) -> Result<T> {
        check_status(self.status, what)?;
        self.payload
            .ok_or_else(|| BrowseError::MalformedInput(format!("{what}: OK status without payload")))
    }
}
