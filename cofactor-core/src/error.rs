//! Structured matrix errors
//!
//! Every failure is a value the caller can inspect, serialize and report.
//! Nothing in the engine panics on bad input.

use serde::{Deserialize, Serialize};
use std::collections::TryReserveError;
use thiserror::Error;

/// Kind of failure (machine-readable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    #[error("invalid shape")]
    InvalidShape,

    #[error("shape mismatch")]
    ShapeMismatch,

    #[error("matrix is not square")]
    NotSquare,

    #[error("matrix is singular")]
    Singular,

    #[error("allocation failure")]
    AllocationFailure,

    #[error("wrong number of arguments")]
    ArgCount,

    #[error("wrong argument type")]
    ArgType,

    #[error("index out of bounds")]
    IndexOutOfBounds,

    #[error("unknown function")]
    UndefinedFunc,

    #[error("not found")]
    NotFound,

    #[error("internal error")]
    Internal,
}

impl ErrorKind {
    /// Stable code used in rendered messages
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidShape => "INVALID_SHAPE",
            ErrorKind::ShapeMismatch => "SHAPE_MISMATCH",
            ErrorKind::NotSquare => "NOT_SQUARE",
            ErrorKind::Singular => "SINGULAR",
            ErrorKind::AllocationFailure => "ALLOCATION_FAILURE",
            ErrorKind::ArgCount => "ARG_COUNT",
            ErrorKind::ArgType => "ARG_TYPE",
            ErrorKind::IndexOutOfBounds => "INDEX_OUT_OF_BOUNDS",
            ErrorKind::UndefinedFunc => "UNDEFINED_FUNC",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Structured error returned by every fallible operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixError {
    /// What went wrong
    pub kind: ErrorKind,

    /// Human-readable message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Propagation notes, innermost first
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

impl MatrixError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            suggestion: None,
            notes: Vec::new(),
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: add propagation note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    // ========== Common Error Constructors ==========

    pub fn invalid_shape(rows: usize, cols: usize) -> Self {
        Self::new(
            ErrorKind::InvalidShape,
            format!("{}x{} is not a usable matrix shape", rows, cols),
        )
        .with_suggestion("Rows and columns must both be positive")
    }

    pub fn invalid_dimension(func: &str, arg: &str, value: f64) -> Self {
        Self::new(
            ErrorKind::InvalidShape,
            format!("{}: '{}' is {}, dimensions must be positive", func, arg, value),
        )
        .with_suggestion("Rows and columns must both be positive")
    }

    pub fn shape_mismatch(op: &str, left: (usize, usize), right: (usize, usize)) -> Self {
        Self::new(
            ErrorKind::ShapeMismatch,
            format!(
                "{}: incompatible shapes {}x{} and {}x{}",
                op, left.0, left.1, right.0, right.1
            ),
        )
    }

    pub fn not_square(op: &str, rows: usize, cols: usize) -> Self {
        Self::new(
            ErrorKind::NotSquare,
            format!("{} requires a square matrix, got {}x{}", op, rows, cols),
        )
    }

    pub fn singular() -> Self {
        Self::new(ErrorKind::Singular, "Determinant is zero, inverse is undefined")
    }

    pub fn allocation_failure(details: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::AllocationFailure,
            format!("Allocation failed: {}", details.into()),
        )
    }

    pub fn index_out_of_bounds(row: usize, col: usize, shape: (usize, usize)) -> Self {
        Self::new(
            ErrorKind::IndexOutOfBounds,
            format!("({}, {}) is outside a {}x{} matrix", row, col, shape.0, shape.1),
        )
    }

    pub fn arg_count(func: &str, expected: usize, got: usize) -> Self {
        Self::new(
            ErrorKind::ArgCount,
            format!("{}() expects {} arguments, got {}", func, expected, got),
        )
        .with_suggestion(format!("Use help('{}') for usage", func))
    }

    pub fn arg_type(func: &str, arg: &str, expected: &str, got: &str) -> Self {
        Self::new(
            ErrorKind::ArgType,
            format!("{}() argument '{}': expected {}, got {}", func, arg, expected, got),
        )
    }

    pub fn undefined_func(name: &str) -> Self {
        Self::new(ErrorKind::UndefinedFunc, format!("Unknown function: {}", name))
    }

    pub fn not_found(name: &str) -> Self {
        Self::new(ErrorKind::NotFound, format!("No function named '{}'", name))
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
    }
}

impl std::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for MatrixError {}

impl From<TryReserveError> for MatrixError {
    fn from(err: TryReserveError) -> Self {
        Self::allocation_failure(err.to_string())
    }
}
