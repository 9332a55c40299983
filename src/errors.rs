//! Error types shared across the crate.

use std::fmt::{Display, Formatter};

/// Shared application result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error enumeration covering all failure modes of the
/// data-access layer.
///
/// The type is `Clone` because the outcome of a shared in-flight fetch is
/// broadcast to every caller waiting on the same cache key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Configuration parsing or validation failure.
    Config(String),
    /// Request rejected before it was sent (missing colleague, short
    /// query, incomplete action command).
    Validation(String),
    /// Network-level failure: connect, TLS, or request transmission.
    Transport(String),
    /// Server answered with a non-2xx status other than 404.
    Http {
        /// HTTP status code returned by the server.
        status: u16,
        /// Response body, trimmed, for diagnostics.
        message: String,
    },
    /// Requested entity does not exist (HTTP 404).
    NotFound(String),
    /// Response body could not be decoded as the expected JSON shape.
    Decode(String),
    /// Cache bookkeeping failure, e.g. an entry of the wrong kind under a
    /// key. Indicates a bug in this crate, not a server problem.
    Cache(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Validation(msg) => write!(f, "validation: {msg}"),
            Self::Transport(msg) => write!(f, "transport: {msg}"),
            Self::Http { status, message } => write!(f, "http {status}: {message}"),
            Self::NotFound(msg) => write!(f, "not found: {msg}"),
            Self::Decode(msg) => write!(f, "decode: {msg}"),
            Self::Cache(msg) => write!(f, "cache: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("invalid config: {err}"))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
