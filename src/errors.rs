use thiserror::Error;

/// Errors surfaced by rsdex.
///
/// These are the top-level errors displayed to the user; each maps to a
/// sysexits-compatible exit code via [`DexError::exit_code`].
#[derive(Error, Debug)]
pub enum DexError {
    #[error("failed to reach {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{0}' not found")]
    NotFound(String),

    #[error("unexpected response body from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("no numeric id in resource url: {0}")]
    InvalidResourceUrl(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type DexResult<T> = Result<T, DexError>;

impl DexError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DexError::Http { .. } => crate::exitcode::UNAVAILABLE,
            DexError::NotFound(_) => crate::exitcode::NOINPUT,
            DexError::Decode { .. } | DexError::InvalidResourceUrl(_) => crate::exitcode::DATAERR,
            DexError::Config(_) => crate::exitcode::CONFIG,
        }
    }
}
