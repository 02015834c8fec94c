use std::fmt;

/// Everything that can go wrong in the resource and logging layers.
///
/// `KeyNotFound` and `LoadFailure` are fatal during the startup bulk load
/// and recoverable (log + skip) afterwards; `DuplicateKey` is always a
/// logged no-op; `SinkUnavailable` downgrades the logger to console-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    KeyNotFound { kind: &'static str, key: String },
    DuplicateKey { kind: &'static str, key: String },
    LoadFailure { kind: &'static str, source: String, reason: String },
    SinkUnavailable { path: String, reason: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyNotFound { kind, key } => {
                write!(f, "{kind} key '{key}' not found")
            }
            Error::DuplicateKey { kind, key } => {
                write!(f, "{kind} key '{key}' already loaded")
            }
            Error::LoadFailure { kind, source, reason } => {
                write!(f, "failed to load {kind} from {source}: {reason}")
            }
            Error::SinkUnavailable { path, reason } => {
                write!(f, "failed to open log sink {path}: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {}
