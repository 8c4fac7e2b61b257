//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Message used when the API reports a failure without saying why
pub const GENERIC_REMOTE_ERROR: &str = "Remote API error";

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Remote API Errors
    // ─────────────────────────────────────────────────────────────
    /// The API answered with `ok: false` or a non-success status.
    /// The message is the server-supplied text, shown verbatim.
    #[error("{message}")]
    Remote { message: String },

    /// The request never produced a usable response (connect, timeout, TLS).
    #[error("Could not reach the Suite Hub API: {message}")]
    Transport { message: String },

    /// The response arrived but did not have the expected shape.
    #[error("Unexpected API response: {message}")]
    Protocol { message: String },

    // ─────────────────────────────────────────────────────────────
    // Client-side Validation
    // ─────────────────────────────────────────────────────────────
    #[error("{message}")]
    Validation { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    /// Build a remote error from an optional server message, falling back to
    /// [`GENERIC_REMOTE_ERROR`] when the server did not say anything useful.
    pub fn remote(message: Option<impl Into<String>>) -> Self {
        let message = message
            .map(Into::into)
            .filter(|m: &String| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_REMOTE_ERROR.to_string());
        Self::Remote { message }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
///
/// The context is logged at debug level; the error itself is returned
/// unchanged so its message stays user-facing.
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::debug!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::debug!("{}: {:?}", f(), err);
            err
        })
    }
}
