use thiserror::Error;

/// Result type alias using TransmuteError
pub type Result<T> = std::result::Result<T, TransmuteError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// The transmute operations themselves never fail; these kinds classify the
/// fallible edges around them (key-path parsing, command application, typed
/// conversion). Each kind maps to a stable error code that can be used for
/// programmatic error handling, testing, and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Key-path parsing
    InvalidKeyPath,
    EmptyKeyPath,

    // Command application
    NotASequence,

    // Typed conversion
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidKeyPath => "ERR_INVALID_KEY_PATH",
            ExErrorKind::EmptyKeyPath => "ERR_EMPTY_KEY_PATH",
            ExErrorKind::NotASequence => "ERR_NOT_A_SEQUENCE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// This error type provides a structured representation of errors with
/// classification fields for programmatic handling and rich context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    key_path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            key_path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add key-path context
    pub fn with_key_path(mut self, path: impl Into<String>) -> Self {
        self.key_path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the key-path context, if any
    pub fn key_path(&self) -> Option<&str> {
        self.key_path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.key_path {
            write!(f, " (key_path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for the fallible edges of Transmute
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransmuteError {
    /// A key-path must contain at least one segment
    #[error("Key-path is empty")]
    EmptyKeyPath,

    /// Key-path text could not be parsed
    #[error("Invalid key-path '{path}': {reason}")]
    InvalidKeyPath { path: String, reason: String },

    /// A sequence or tuple command was applied to something other than an array
    #[error("Operation '{op}' requires an array, found {found}")]
    NotASequence { op: String, found: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<TransmuteError> for ExError {
    fn from(err: TransmuteError) -> Self {
        match err {
            TransmuteError::EmptyKeyPath => {
                ExError::new(ExErrorKind::EmptyKeyPath).with_message("Key-path is empty")
            }

            TransmuteError::InvalidKeyPath { path, reason } => {
                ExError::new(ExErrorKind::InvalidKeyPath)
                    .with_op("parse_key_path")
                    .with_key_path(path)
                    .with_message(reason)
            }

            TransmuteError::NotASequence { op, found } => ExError::new(ExErrorKind::NotASequence)
                .with_op(op)
                .with_message(format!("Expected an array, found {}", found)),

            TransmuteError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for TransmuteError {
    fn from(err: serde_json::Error) -> Self {
        TransmuteError::Serialization {
            message: err.to_string(),
        }
    }
}
