use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Pl0Error {
    // File and I/O errors
    IoError(io::Error),

    // Tree serialization errors
    JsonError(serde_json::Error),

    // Errors raised by downstream visitors while walking the tree
    VisitError {
        message: String,
        line: usize,
    },

    // Generic errors
    GenericError(String),
}

impl Pl0Error {
    /// Create a visit error with line information
    pub fn visit_error(message: impl Into<String>, line: usize) -> Self {
        Pl0Error::VisitError {
            message: message.into(),
            line,
        }
    }
}

impl fmt::Display for Pl0Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pl0Error::IoError(err) => write!(f, "I/O error: {}", err),
            Pl0Error::JsonError(err) => write!(f, "JSON error: {}", err),
            Pl0Error::VisitError { message, line } => {
                write!(f, "Visit error at line {}: {}", line, message)
            }
            Pl0Error::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Pl0Error {}

// Conversion implementations for common error types
impl From<io::Error> for Pl0Error {
    fn from(err: io::Error) -> Self {
        Pl0Error::IoError(err)
    }
}

impl From<serde_json::Error> for Pl0Error {
    fn from(err: serde_json::Error) -> Self {
        Pl0Error::JsonError(err)
    }
}

impl From<String> for Pl0Error {
    fn from(err: String) -> Self {
        Pl0Error::GenericError(err)
    }
}

impl From<&str> for Pl0Error {
    fn from(err: &str) -> Self {
        Pl0Error::GenericError(err.to_string())
    }
}

// Type alias for Result with Pl0Error
pub type Pl0Result<T> = Result<T, Pl0Error>;
