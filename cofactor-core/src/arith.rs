//! Element-wise and linear-algebra operations
//!
//! Every operation borrows its inputs and returns a freshly allocated result.

use crate::matrix::alloc_zeroed;
use crate::{Matrix, MatrixError};

impl Matrix {
    /// Element-wise sum. Shapes must be identical.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Element-wise difference. Shapes must be identical.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "sub", |a, b| a - b)
    }

    /// Multiply every element by `k`.
    pub fn scale(&self, k: f64) -> Result<Matrix, MatrixError> {
        self.ensure_usable()?;
        let mut data = alloc_zeroed(self.as_slice().len())?;
        for (dst, &x) in data.iter_mut().zip(self.as_slice()) {
            *dst = x * k;
        }
        Ok(Matrix::from_parts(self.rows(), self.cols(), data))
    }

    /// Matrix product. Requires `self.cols() == other.rows()`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.ensure_usable()?;
        other.ensure_usable()?;
        if self.cols() != other.rows() {
            return Err(MatrixError::shape_mismatch("matmul", self.shape(), other.shape())
                .with_suggestion("Left column count must equal right row count"));
        }

        let (n, inner, m) = (self.rows(), self.cols(), other.cols());
        let a = self.as_slice();
        let b = other.as_slice();
        let mut data = alloc_zeroed(n * m)?;
        for i in 0..n {
            for j in 0..m {
                let mut sum = 0.0;
                for k in 0..inner {
                    sum += a[i * inner + k] * b[k * m + j];
                }
                data[i * m + j] = sum;
            }
        }
        Ok(Matrix::from_parts(n, m, data))
    }

    /// `cols × rows` matrix with `t[j][i] = self[i][j]`.
    pub fn transpose(&self) -> Result<Matrix, MatrixError> {
        self.ensure_usable()?;
        let (rows, cols) = self.shape();
        let src = self.as_slice();
        let mut data = alloc_zeroed(src.len())?;
        for i in 0..rows {
            for j in 0..cols {
                data[j * rows + i] = src[i * cols + j];
            }
        }
        Ok(Matrix::from_parts(cols, rows, data))
    }

    fn zip_with(
        &self,
        other: &Matrix,
        op: &str,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Matrix, MatrixError> {
        self.ensure_usable()?;
        other.ensure_usable()?;
        if self.shape() != other.shape() {
            return Err(MatrixError::shape_mismatch(op, self.shape(), other.shape()));
        }

        let mut data = alloc_zeroed(self.as_slice().len())?;
        for ((dst, &a), &b) in data.iter_mut().zip(self.as_slice()).zip(other.as_slice()) {
            *dst = f(a, b);
        }
        Ok(Matrix::from_parts(self.rows(), self.cols(), data))
    }
}
