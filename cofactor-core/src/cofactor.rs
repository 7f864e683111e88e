//! Minors, determinant, cofactor matrix and inverse
//!
//! The determinant is computed by Laplace expansion along the first row,
//! O(n!) by construction. Minors are written into a scratch arena sized
//! once per call: recursion level `k` owns a fixed `(k-1)²` slice that is
//! overwritten by each sibling minor, so no allocation happens inside the
//! recursion. Summation order is ascending column index.

use crate::matrix::alloc_zeroed;
use crate::{Matrix, MatrixError};
use tracing::{debug, trace};

/// Number of doubles needed for every minor on one path of an `n × n` expansion.
fn laplace_scratch_len(n: usize) -> Result<usize, MatrixError> {
    (1..n).try_fold(0usize, |acc, k| {
        k.checked_mul(k).and_then(|sq| acc.checked_add(sq))
    })
    .ok_or_else(|| MatrixError::allocation_failure(format!("scratch for order {} overflows", n)))
}

/// Reusable buffer for transient minors.
///
/// The same size serves the determinant of an `n × n` matrix and its cofactor
/// matrix: one `(n-1)²` minor slot followed by the space to expand it.
struct ScratchArena {
    buf: Vec<f64>,
}

impl ScratchArena {
    fn for_order(n: usize) -> Result<Self, MatrixError> {
        Ok(Self { buf: alloc_zeroed(laplace_scratch_len(n)?)? })
    }

    fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.buf
    }
}

/// Copy the `n × n` matrix `src` minus one row and column into `dst`.
fn write_minor(src: &[f64], n: usize, skip_row: usize, skip_col: usize, dst: &mut [f64]) {
    let mut k = 0;
    for i in (0..n).filter(|&i| i != skip_row) {
        for j in (0..n).filter(|&j| j != skip_col) {
            dst[k] = src[i * n + j];
            k += 1;
        }
    }
}

/// `scratch` must hold at least `laplace_scratch_len(n)` values.
fn laplace(a: &[f64], n: usize, scratch: &mut [f64]) -> f64 {
    match n {
        1 => a[0],
        2 => a[0] * a[3] - a[1] * a[2],
        _ => {
            let (minor, rest) = scratch.split_at_mut((n - 1) * (n - 1));
            let mut det = 0.0;
            let mut sign = 1.0;
            for i in 0..n {
                write_minor(a, n, 0, i, minor);
                det += a[i] * sign * laplace(minor, n - 1, rest);
                sign = -sign;
            }
            det
        }
    }
}

impl Matrix {
    fn ensure_square(&self, op: &str) -> Result<usize, MatrixError> {
        self.ensure_usable()?;
        if !self.is_square() {
            return Err(MatrixError::not_square(op, self.rows(), self.cols()));
        }
        Ok(self.rows())
    }

    /// The `(n-1) × (n-1)` submatrix without `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix, MatrixError> {
        let n = self.ensure_square("minor")?;
        if n < 2 {
            return Err(MatrixError::invalid_shape(n, n)
                .with_note("minor: a 1x1 matrix has no minors"));
        }
        if row >= n || col >= n {
            return Err(MatrixError::index_out_of_bounds(row, col, self.shape()));
        }

        let mut data = alloc_zeroed((n - 1) * (n - 1))?;
        write_minor(self.as_slice(), n, row, col, &mut data);
        Ok(Matrix::from_parts(n - 1, n - 1, data))
    }

    /// Determinant by recursive cofactor expansion along the first row.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        let n = self.ensure_square("determinant")?;
        trace!(n, "determinant");

        let mut arena = ScratchArena::for_order(n)?;
        Ok(laplace(self.as_slice(), n, arena.as_mut_slice()))
    }

    /// Matrix of signed minor determinants, `c[i][j] = (-1)^(i+j) · det(minor(i, j))`.
    ///
    /// The cofactor matrix of a 1×1 matrix is `[[1]]`.
    pub fn cofactors(&self) -> Result<Matrix, MatrixError> {
        let n = self.ensure_square("cofactors")?;
        trace!(n, "cofactors");

        if n == 1 {
            let mut data = alloc_zeroed(1)?;
            data[0] = 1.0;
            return Ok(Matrix::from_parts(1, 1, data));
        }

        let a = self.as_slice();
        let mut data = alloc_zeroed(n * n)?;
        let mut arena = ScratchArena::for_order(n)?;
        let (minor, rest) = arena.as_mut_slice().split_at_mut((n - 1) * (n - 1));

        for i in 0..n {
            for j in 0..n {
                write_minor(a, n, i, j, minor);
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                data[i * n + j] = sign * laplace(minor, n - 1, rest);
            }
        }
        Ok(Matrix::from_parts(n, n, data))
    }

    /// Inverse via the adjugate: `transpose(cofactors) · (1 / det)`.
    ///
    /// Fails with `Singular` when the determinant is exactly zero.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        let det = self
            .determinant()
            .map_err(|e| e.with_note("inverse: determinant stage"))?;
        debug!(det, "inverse: determinant");
        if det == 0.0 {
            return Err(MatrixError::singular()
                .with_suggestion("Only matrices with a non-zero determinant are invertible"));
        }

        let adjugate = {
            let cofactors = self
                .cofactors()
                .map_err(|e| e.with_note("inverse: cofactor matrix stage"))?;
            debug!("inverse: cofactor matrix");
            cofactors
                .transpose()
                .map_err(|e| e.with_note("inverse: adjugate stage"))?
        };
        debug!("inverse: adjugate");

        adjugate
            .scale(1.0 / det)
            .map_err(|e| e.with_note("inverse: scale stage"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, Tolerance};
    use nalgebra::DMatrix;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    fn to_nalgebra(a: &Matrix) -> DMatrix<f64> {
        DMatrix::from_row_slice(a.rows(), a.cols(), a.as_slice())
    }

    /// Allocating expansion, one fresh minor per term
    fn naive_determinant(a: &Matrix) -> f64 {
        match a.rows() {
            1 => a.get(0, 0).unwrap(),
            2 => a.get(0, 0).unwrap() * a.get(1, 1).unwrap()
                - a.get(0, 1).unwrap() * a.get(1, 0).unwrap(),
            n => {
                let mut det = 0.0;
                let mut sign = 1.0;
                for i in 0..n {
                    let minor = a.minor(0, i).unwrap();
                    det += a.get(0, i).unwrap() * sign * naive_determinant(&minor);
                    sign = -sign;
                }
                det
            }
        }
    }

    fn awkward(n: usize) -> Matrix {
        let mut a = Matrix::new(n, n).unwrap();
        for i in 0..n {
            for j in 0..n {
                let v = ((i * 7 + j * 13) % 11) as f64 * 0.37 - (i as f64) / 3.0 + 1.0 / (j as f64 + 1.5);
                a.set(i, j, v).unwrap();
            }
        }
        a
    }

    #[test]
    fn test_scratch_len() {
        assert_eq!(laplace_scratch_len(1).unwrap(), 0);
        assert_eq!(laplace_scratch_len(2).unwrap(), 1);
        assert_eq!(laplace_scratch_len(4).unwrap(), 1 + 4 + 9);
        assert!(laplace_scratch_len(usize::MAX).is_err());
    }

    #[test]
    fn test_minor() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        assert!(a.minor(1, 1).unwrap().equals(&m(&[&[1.0, 3.0], &[7.0, 9.0]])));
        assert!(a.minor(0, 2).unwrap().equals(&m(&[&[4.0, 5.0], &[7.0, 8.0]])));
        assert!(a.minor(2, 0).unwrap().equals(&m(&[&[2.0, 3.0], &[5.0, 6.0]])));
    }

    #[test]
    fn test_minor_guards() {
        let rect = m(&[&[1.0, 2.0]]);
        assert_eq!(rect.minor(0, 0).unwrap_err().kind, ErrorKind::NotSquare);
        let single = m(&[&[1.0]]);
        assert_eq!(single.minor(0, 0).unwrap_err().kind, ErrorKind::InvalidShape);
        let sq = Matrix::identity(2).unwrap();
        assert_eq!(sq.minor(2, 0).unwrap_err().kind, ErrorKind::IndexOutOfBounds);
    }

    #[test]
    fn test_determinant_small() {
        assert_eq!(m(&[&[-3.5]]).determinant().unwrap(), -3.5);
        assert_eq!(m(&[&[4.0, 7.0], &[2.0, 6.0]]).determinant().unwrap(), 10.0);
        let a = m(&[&[2.0, -3.0, 1.0], &[2.0, 0.0, -1.0], &[1.0, 4.0, 5.0]]);
        assert_eq!(a.determinant().unwrap(), 49.0);
    }

    #[test]
    fn test_determinant_4x4() {
        let a = m(&[
            &[3.0, 2.0, 0.0, 1.0],
            &[4.0, 0.0, 1.0, 2.0],
            &[3.0, 0.0, 2.0, 1.0],
            &[9.0, 2.0, 3.0, 1.0],
        ]);
        assert!((a.determinant().unwrap() - 24.0).abs() < 1e-12);
    }

    #[test]
    fn test_determinant_of_identity() {
        for n in 1..=7 {
            assert_eq!(Matrix::identity(n).unwrap().determinant().unwrap(), 1.0);
        }
    }

    #[test]
    fn test_determinant_not_square() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(a.determinant().unwrap_err().kind, ErrorKind::NotSquare);
    }

    #[test]
    fn test_determinant_of_released_matrix() {
        let mut a = Matrix::identity(2).unwrap();
        a.release();
        assert_eq!(a.determinant().unwrap_err().kind, ErrorKind::InvalidShape);
    }

    #[test]
    fn test_arena_matches_allocating_expansion_bitwise() {
        for n in 1..=6 {
            let a = awkward(n);
            let fast = a.determinant().unwrap();
            let slow = naive_determinant(&a);
            assert_eq!(fast.to_bits(), slow.to_bits(), "order {}", n);
        }
    }

    #[test]
    fn test_determinant_matches_nalgebra() {
        for n in 1..=6 {
            let a = awkward(n);
            let expected = to_nalgebra(&a).determinant();
            let got = a.determinant().unwrap();
            assert!(
                (got - expected).abs() <= 1e-9 * expected.abs().max(1.0),
                "order {}: {} vs {}",
                n,
                got,
                expected
            );
        }
    }

    #[test]
    fn test_cofactors_1x1() {
        let c = m(&[&[5.0]]).cofactors().unwrap();
        assert!(c.equals(&m(&[&[1.0]])));
    }

    #[test]
    fn test_cofactors_3x3() {
        let a = m(&[&[1.0, 2.0, 3.0], &[0.0, 4.0, 2.0], &[5.0, 2.0, 1.0]]);
        let expected = m(&[&[0.0, 10.0, -20.0], &[4.0, -14.0, 8.0], &[-8.0, -2.0, 4.0]]);
        assert!(a.cofactors().unwrap().equals(&expected));
    }

    #[test]
    fn test_cofactors_2x2() {
        let a = m(&[&[4.0, 7.0], &[2.0, 6.0]]);
        assert!(a.cofactors().unwrap().equals(&m(&[&[6.0, -2.0], &[-7.0, 4.0]])));
    }

    #[test]
    fn test_cofactors_not_square() {
        let a = m(&[&[1.0, 2.0]]);
        assert_eq!(a.cofactors().unwrap_err().kind, ErrorKind::NotSquare);
    }

    #[test]
    fn test_inverse_2x2() {
        let a = m(&[&[4.0, 7.0], &[2.0, 6.0]]);
        let inv = a.inverse().unwrap();
        assert!(inv.equals(&m(&[&[0.6, -0.7], &[-0.2, 0.4]])));
    }

    #[test]
    fn test_inverse_3x3() {
        let a = m(&[&[2.0, 5.0, 7.0], &[6.0, 3.0, 4.0], &[5.0, -2.0, -3.0]]);
        let expected = m(&[&[1.0, -1.0, 1.0], &[-38.0, 41.0, -34.0], &[27.0, -29.0, 24.0]]);
        assert!(a.inverse().unwrap().equals(&expected));
    }

    #[test]
    fn test_inverse_1x1() {
        let inv = m(&[&[4.0]]).inverse().unwrap();
        assert!(inv.equals(&m(&[&[0.25]])));
    }

    #[test]
    fn test_inverse_singular() {
        let a = m(&[&[1.0, 2.0], &[2.0, 4.0]]);
        assert_eq!(a.determinant().unwrap(), 0.0);
        let err = a.inverse().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Singular);
    }

    #[test]
    fn test_inverse_not_square_notes_stage() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let err = a.inverse().unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotSquare);
        assert_eq!(err.notes, vec!["inverse: determinant stage".to_string()]);
    }

    #[test]
    fn test_inverse_round_trip() {
        for n in 1..=5 {
            let a = awkward(n);
            let inv = a.inverse().unwrap();
            let product = a.matmul(&inv).unwrap();
            assert!(
                product.equals_within(&Matrix::identity(n).unwrap(), Tolerance::new(1e-7)),
                "order {}: {}",
                n,
                product
            );
        }
    }

    #[test]
    fn test_inverse_matches_nalgebra() {
        let a = awkward(4);
        let expected = to_nalgebra(&a).try_inverse().unwrap();
        let inv = a.inverse().unwrap();
        for i in 0..4 {
            for j in 0..4 {
                assert!((inv.get(i, j).unwrap() - expected[(i, j)]).abs() < 1e-7);
            }
        }
    }

    #[test]
    fn test_inputs_not_mutated() {
        let a = m(&[&[2.0, 5.0, 7.0], &[6.0, 3.0, 4.0], &[5.0, -2.0, -3.0]]);
        let snapshot = a.clone();
        let _ = a.determinant().unwrap();
        let _ = a.cofactors().unwrap();
        let _ = a.inverse().unwrap();
        assert_eq!(a.as_slice(), snapshot.as_slice());
    }
}
