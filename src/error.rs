//! Unified error types for sbom-guard.
//!
//! Load failures are tagged so the caller can decide how to map them to exit
//! codes. Classification and diffing are total over a loaded SBOM and never
//! produce errors.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sbom-guard operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GuardError {
    /// The input path could not be opened or read
    #[error("Cannot read SBOM at {}: {source}", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Errors while turning document content into an SBOM
    #[error("Failed to parse SBOM: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Failed to render report: {0}")]
    RenderFailed(String),
}

/// Flat tag for a [`GuardError`], used to decide exit codes and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputNotFound,
    MalformedDocument,
    SchemaViolation,
    Config,
    Report,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for sbom-guard operations
pub type Result<T> = std::result::Result<T, GuardError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl GuardError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a malformed-document error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::parse(
            "invalid document",
            ParseErrorKind::MalformedDocument(message.into()),
        )
    }

    /// Create a parse error for a missing required field
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::parse(
            "missing required field",
            ParseErrorKind::MissingField {
                field: field.into(),
                context: context.into(),
            },
        )
    }

    /// Create an input error with path context
    pub fn input_not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputNotFound {
            path: path.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// The error's tag.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InputNotFound { .. } => ErrorKind::InputNotFound,
            Self::Parse {
                source: ParseErrorKind::MalformedDocument(_),
                ..
            } => ErrorKind::MalformedDocument,
            Self::Parse {
                source: ParseErrorKind::MissingField { .. },
                ..
            } => ErrorKind::SchemaViolation,
            Self::Report { .. } => ErrorKind::Report,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Whether this error came from loading an SBOM document.
    #[must_use]
    pub const fn is_load_failure(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InputNotFound | ErrorKind::MalformedDocument | ErrorKind::SchemaViolation
        )
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<serde_json::Error> for GuardError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err.to_string())
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are prepended to the existing context, building a chain
/// such as `"loading old.json: invalid document"`.
///
/// ```ignore
/// use sbom_guard::error::ErrorContext;
///
/// let sbom = parse_sbom_str(&content)
///     .with_context(|| format!("loading {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<GuardError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
///
/// `InputNotFound` already names its path and is returned unchanged.
fn add_context_to_error(err: GuardError, new_ctx: &str) -> GuardError {
    match err {
        GuardError::Parse {
            context: existing,
            source,
        } => GuardError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        GuardError::Report {
            context: existing,
            source,
        } => GuardError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        GuardError::Config(msg) => GuardError::Config(chain_context(new_ctx, &msg)),
        other @ GuardError::InputNotFound { .. } => other,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
