use std::fmt;

/// Raised when a string is not one of the known electricity mode names.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeParseError(pub String);

impl fmt::Display for ModeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown electricity mode: {}", self.0)
    }
}

impl std::error::Error for ModeParseError {}
