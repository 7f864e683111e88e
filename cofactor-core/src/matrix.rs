//! Dense matrix storage and lifecycle

use crate::{MatrixError, Tolerance};
use std::fmt;

/// A dense `rows × cols` matrix of `f64`, stored row-major in one buffer.
///
/// A matrix with zero rows and columns is the empty sentinel: it owns no
/// storage and is rejected by every arithmetic operation. Freshly created
/// matrices are never empty; they only become empty through [`Matrix::release`]
/// or [`Matrix::default`].
#[derive(Debug, Clone, Default)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// Reserve and zero-fill a buffer, reporting allocation failure instead of aborting.
pub(crate) fn alloc_zeroed(len: usize) -> Result<Vec<f64>, MatrixError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)?;
    data.resize(len, 0.0);
    Ok(data)
}

fn checked_len(rows: usize, cols: usize) -> Result<usize, MatrixError> {
    rows.checked_mul(cols).ok_or_else(|| {
        MatrixError::allocation_failure(format!("{}x{} elements overflow usize", rows, cols))
    })
}

impl Matrix {
    // ========== Lifecycle ==========

    /// Allocate a zero-filled `rows × cols` matrix.
    ///
    /// Fails with `InvalidShape` if either dimension is zero and with
    /// `AllocationFailure` if the buffer cannot be reserved.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::invalid_shape(rows, cols));
        }
        let data = alloc_zeroed(checked_len(rows, cols)?)?;
        Ok(Self { data, rows, cols })
    }

    /// Free the storage and reset to the empty sentinel. Safe to call twice.
    pub fn release(&mut self) {
        self.data = Vec::new();
        self.rows = 0;
        self.cols = 0;
    }

    /// Build from row-major data.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::invalid_shape(rows, cols));
        }
        if data.len() != checked_len(rows, cols)? {
            return Err(MatrixError::invalid_shape(rows, cols).with_note(format!(
                "from_vec: got {} values, expected {}",
                data.len(),
                rows * cols
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Build from a slice of equally long rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut m = Self::new(n_rows, n_cols)?;

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(MatrixError::invalid_shape(n_rows, n_cols).with_note(format!(
                    "from_rows: row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
            m.data[i * n_cols..(i + 1) * n_cols].copy_from_slice(row);
        }
        Ok(m)
    }

    /// `n × n` identity matrix
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Wrap an already-sized buffer. Callers guarantee `data.len() == rows * cols`.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// Reject the empty sentinel before doing any work on it.
    pub(crate) fn ensure_usable(&self) -> Result<(), MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::invalid_shape(self.rows, self.cols));
        }
        Ok(())
    }

    // ========== Accessors ==========

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True for the empty sentinel
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::index_out_of_bounds(row, col, self.shape()));
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.rows {
            Some(&self.data[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    /// Row-major view of every element
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    // ========== Equality ==========

    /// Element-wise comparison with the default tolerance (1e-7).
    pub fn equals(&self, other: &Matrix) -> bool {
        self.equals_within(other, Tolerance::default())
    }

    /// Same shape and every pair of elements within `tolerance`.
    /// Stops at the first mismatch.
    pub fn equals_within(&self, other: &Matrix, tolerance: Tolerance) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| tolerance.within(a, b))
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.rows {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[i * self.cols + j])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
