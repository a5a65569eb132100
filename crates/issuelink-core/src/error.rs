//! Error types for issuelink-core

use std::fmt;

/// Result type alias for issuelink operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for issuelink operations
///
/// The extractors themselves never fail; errors only arise from matcher
/// compilation and output writing.
#[derive(Debug)]
pub enum Error {
    /// Issue key pattern compilation error
    Pattern(String),

    /// Invalid configuration
    Config(String),

    /// I/O error
    Io(std::io::Error),

    /// Other errors
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pattern(msg) => write!(f, "Pattern error: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Pattern(err.to_string())
    }
}

/// Fieldless error category for zero-cost pattern matching.
///
/// Single byte representation (`#[repr(u8)]`), `Copy`, no allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorKind {
    /// Issue key pattern compilation error
    Pattern,
    /// Configuration error
    Config,
    /// I/O operation error
    Io,
    /// Other errors
    Other,
}

impl Error {
    /// Get the error kind — zero allocation, returns a Copy enum.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Pattern(_) => ErrorKind::Pattern,
            Error::Config(_) => ErrorKind::Config,
            Error::Io(_) => ErrorKind::Io,
            Error::Other(_) => ErrorKind::Other,
        }
    }

    /// Borrow the error message — zero allocation.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Error::Pattern(msg) | Error::Config(msg) | Error::Other(msg) => msg,
            Error::Io(_) => "I/O error",
        }
    }
}
