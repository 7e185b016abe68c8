//! Error types shared by every demonstration.

use std::fmt;
use std::io;
use std::panic::Location;
use thiserror::Error;

/// Failure outcomes a demonstration can produce.
///
/// These are expected, enumerable conditions; callers match on them instead of
/// unwinding.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Division by Zero")]
    DivisionByZero,

    /// A variant was asked for something its contract promises but it cannot do.
    #[error("{0}")]
    Unsupported(String),

    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Coarse tag for [`DemoError`], used when a caller only cares about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    Validation,
    Failure,
}

impl DemoError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            DemoError::NotFound => FailureKind::NotFound,
            DemoError::Validation(_) => FailureKind::Validation,
            DemoError::DivisionByZero | DemoError::Unsupported(_) | DemoError::Encode(_) => {
                FailureKind::Failure
            }
        }
    }

    /// Numeric code reported alongside the message. None of the demos assign one.
    pub fn code(&self) -> i32 {
        0
    }
}

/// An error together with the source location that raised it.
pub struct Raised<E> {
    error: E,
    location: &'static Location<'static>,
}

impl<E> Raised<E> {
    #[track_caller]
    pub fn here(error: E) -> Self {
        Self {
            error,
            location: Location::caller(),
        }
    }

    pub fn error(&self) -> &E {
        &self.error
    }

    pub fn into_inner(self) -> E {
        self.error
    }

    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    pub fn line(&self) -> u32 {
        self.location.line()
    }
}

impl<E: fmt::Display> fmt::Display for Raised<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {}:{})", self.error, self.file(), self.line())
    }
}

impl<E: fmt::Debug> fmt::Debug for Raised<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Raised")
            .field("error", &self.error)
            .field("file", &self.file())
            .field("line", &self.line())
            .finish()
    }
}

impl<E: std::error::Error + 'static> std::error::Error for Raised<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Failures while loading the runner configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(DemoError::DivisionByZero.to_string(), "Division by Zero");
        assert_eq!(DemoError::validation("No Name").to_string(), "No Name");
        assert_eq!(
            DemoError::unsupported("Penguins can't fly.").to_string(),
            "Penguins can't fly."
        );
        assert_eq!(DemoError::NotFound.to_string(), "not found");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(DemoError::NotFound.kind(), FailureKind::NotFound);
        assert_eq!(DemoError::validation("x").kind(), FailureKind::Validation);
        assert_eq!(DemoError::DivisionByZero.kind(), FailureKind::Failure);
        assert_eq!(DemoError::unsupported("x").kind(), FailureKind::Failure);
        assert_eq!(DemoError::DivisionByZero.code(), 0);
    }

    #[test]
    fn test_raised_records_caller_location() {
        let expected_line = line!() + 1;
        let raised = Raised::here(DemoError::NotFound);
        assert_eq!(raised.line(), expected_line);
        assert!(raised.file().ends_with("error.rs"));
        assert!(matches!(raised.error(), DemoError::NotFound));
        assert!(raised.to_string().starts_with("not found (at "));
        assert!(matches!(raised.into_inner(), DemoError::NotFound));
    }
}
