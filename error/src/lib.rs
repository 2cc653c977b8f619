use std::error::Error as StdError;

use thiserror::Error;

/// Failure signal of the persistence layer: a human-readable message with an
/// optional underlying cause, exposed through [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DataProcessingError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl DataProcessingError {
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source<M: Into<String>, S: Into<Box<dyn StdError + Send + Sync>>>(
        message: M,
        source: S,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn display_shows_message_only() {
        let err = DataProcessingError::new("Failed to create new driver with name 'Bob'");
        assert_eq!(
            err.to_string(),
            "Failed to create new driver with name 'Bob'"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn source_exposes_underlying_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err = DataProcessingError::with_source("Failed to read all drivers", cause);
        assert_eq!(err.message(), "Failed to read all drivers");
        assert_eq!(err.source().unwrap().to_string(), "disk gone");
    }
}
