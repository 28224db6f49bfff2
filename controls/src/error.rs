//! Failure taxonomy shared by the reorder and preview controllers.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a controller operation did not produce a usable result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControlError {
    /// The request never produced a readable response.
    #[error("network failure: {0}")]
    Network(String),
    /// The server answered, but reported `success: false`.
    #[error("rejected by server: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
    /// Something the operation needs is absent (no key, no payload, no row id).
    #[error("missing data: {0}")]
    MissingData(String),
}

impl ControlError {
    /// Whether the failure happened before the server could answer.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
