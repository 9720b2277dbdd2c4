use thiserror::Error;

/// Failures a document session operation can report.
///
/// The `Display` form of each variant is the exact line printed to the
/// console by the UI shell; `name` is the file's display name, not the
/// full path.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The target could not be opened (missing on read, uncreatable on write).
    #[error("Unable to open file '{name}'")]
    NotFound {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error interrupted the line-read loop.
    #[error("Error reading file '{name}'")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error interrupted the write.
    #[error("Error saving file '{name}'")]
    Write {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results with SessionError
pub type Result<T> = std::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "no such file")
    }

    #[test]
    fn test_error_display_matches_console_lines() {
        let err = SessionError::NotFound { name: "notes.txt".to_string(), source: io_err() };
        assert_eq!(err.to_string(), "Unable to open file 'notes.txt'");

        let err = SessionError::Read { name: "notes.txt".to_string(), source: io_err() };
        assert_eq!(err.to_string(), "Error reading file 'notes.txt'");

        let err = SessionError::Write { name: "notes.txt".to_string(), source: io_err() };
        assert_eq!(err.to_string(), "Error saving file 'notes.txt'");
    }

    #[test]
    fn test_source_is_preserved() {
        let err = SessionError::NotFound { name: "x".to_string(), source: io_err() };
        let source = std::error::Error::source(&err).expect("source");
        assert!(source.to_string().contains("no such file"));
    }
}
