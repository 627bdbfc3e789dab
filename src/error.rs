//! Error type shared by the board, search and script layers.

/// Errors surfaced by the puzzle library.
///
/// Every failure terminates the current operation and is handed back to the
/// caller; nothing in the library retries internally.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    /// Malformed board description, unknown heuristic or direction name,
    /// zero beam width, or an unparseable script command.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The node-examination bound was reached before the goal was found.
    ///
    /// Recoverable: retry with a larger `limit`.
    #[error("node limit of {limit} reached after examining {examined} nodes without finding the goal")]
    ResourceExceeded { limit: u64, examined: u64 },

    /// The frontier ran dry before the goal was found.
    #[error("frontier exhausted after examining {examined} nodes")]
    FrontierExhausted { examined: u64 },

    /// A configuration file could not be understood.
    #[error("config error: {0}")]
    Config(String),

    /// IO error while reading a script or config file or writing output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PuzzleError {
    /// Shorthand for building an [`PuzzleError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        PuzzleError::InvalidArgument(msg.into())
    }

    /// True for failures that a larger node bound might fix.
    pub fn is_resource_exceeded(&self) -> bool {
        matches!(self, PuzzleError::ResourceExceeded { .. })
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_exceeded_is_distinct_from_invalid_argument() {
        let exceeded = PuzzleError::ResourceExceeded {
            limit: 10,
            examined: 10,
        };
        let invalid = PuzzleError::invalid("bad board");
        assert!(exceeded.is_resource_exceeded());
        assert!(!invalid.is_resource_exceeded());
        assert_eq!(invalid.to_string(), "invalid argument: bad board");
        assert!(exceeded.to_string().contains("node limit of 10"));
    }
}
