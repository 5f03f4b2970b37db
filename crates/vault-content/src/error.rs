//! Error types for vault-content

/// Result type for vault-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vault-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A merged value cannot be represented in the canonical block layout
    #[error("cannot emit {kind} value under key '{key}' as canonical frontmatter")]
    Emit { key: String, kind: &'static str },

    /// An injected conflict resolver failed to produce a decision
    #[error("conflict resolution failed for key '{key}': {message}")]
    Resolve { key: String, message: String },
}

impl Error {
    pub fn emit(key: impl Into<String>, kind: &'static str) -> Self {
        Self::Emit {
            key: key.into(),
            kind,
        }
    }

    pub fn resolve(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Resolve {
            key: key.into(),
            message: message.into(),
        }
    }
}
