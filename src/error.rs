// src/error.rs
use thiserror::Error;

/// Run-fatal failures of the EPG conversion.
///
/// `Transport` covers the network leg (connection failures, non-success
/// HTTP status). Everything else is a format failure: the response body
/// could not be turned into a usable programme schedule. Per-record field
/// problems never surface here; they degrade to absent fields or a skipped
/// record.
#[derive(Debug, Error)]
pub enum EpgError {
    #[error("EPG request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("EPG response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("EPG response has an unexpected shape (expected a list of programmes)")]
    UnexpectedShape,

    #[error("EPG response contains no programmes")]
    EmptySchedule,

    #[error("no programme in the EPG response carries an end time")]
    MissingEndTimes,
}

impl EpgError {
    pub fn is_transport(&self) -> bool {
        matches!(self, EpgError::Transport(_))
    }

    pub fn is_format(&self) -> bool {
        !self.is_transport()
    }
}
