use thiserror::Error;

/// Unified error type for the entire expense-stats-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Upstream collaborators ──────────────────────────────────────
    /// The transaction store or category registry failed to respond.
    /// Surfaced unchanged; the core never retries.
    #[error("Upstream unavailable ({source_name}): {message}")]
    UpstreamUnavailable {
        source_name: String,
        message: String,
    },

    // ── Request validation ──────────────────────────────────────────
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    // ── Serialization / File ────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),
}

impl CoreError {
    /// Shorthand for building an `UpstreamUnavailable` error.
    pub fn upstream(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::UpstreamUnavailable {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// An `UpstreamUnavailable` for a failed HTTP exchange with `source_name`.
    ///
    /// reqwest errors embed the full URL; the query is stripped so user ids
    /// and tokens passed as parameters never end up in logs.
    pub fn http(source_name: impl Into<String>, e: reqwest::Error) -> Self {
        let msg = e.to_string();
        let sanitized = match msg.find('?') {
            Some(idx) => format!("{}?<query redacted>", &msg[..idx]),
            None => msg,
        };
        CoreError::upstream(source_name, sanitized)
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        CoreError::http("http", e)
    }
}
