use serde::Serialize;
use std::fmt;

/// Where a construct was found in the source: file name plus line number.
/// Every AST node carries one. Cloning is the "copy" operation used when a
/// node must keep its own location independent of the originating token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub filename: String,
    pub line: usize,
}

impl SourceLocation {
    pub fn new(filename: impl Into<String>, line: usize) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.filename, self.line)
    }
}
