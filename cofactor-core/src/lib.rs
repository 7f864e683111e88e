//! Cofactor Core - Dense matrix engine
//!
//! This crate provides the core types used throughout Cofactor:
//! - `Matrix`: dynamically sized dense matrix of `f64` with sum, difference,
//!   scalar and matrix products, transpose, determinant, cofactor matrix
//!   and inverse
//! - `MatrixError`: structured, serializable errors
//! - `Tolerance`: the epsilon used for element-wise equality
//! - `Value`: runtime values exchanged with function plugins

mod error;
mod tolerance;
mod matrix;
mod arith;
mod cofactor;
mod value;

pub use error::{ErrorKind, MatrixError};
pub use tolerance::{Tolerance, DEFAULT_EPSILON};
pub use matrix::Matrix;
pub use value::Value;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ErrorKind, Matrix, MatrixError, Tolerance, Value};
}
