//! Zero-copy transpose views.
//!
//! [`Transposed`] wraps a shared reference to any matrix and swaps the
//! row/column semantics of every operation; no element is copied.
//! Transposing a `Transposed` hands back the wrapped reference itself,
//! so repeated transposition can never grow a wrapper chain.
//!
//! [`TransposedMut`] is the mutable counterpart. It can only be built
//! from an exclusive borrow of a matrix that already implements
//! [`MatrixMut`], so writing through a transposed view of a read-only
//! matrix is rejected at compile time rather than failing at run time.

use crate::field::Field;
use crate::matrix::{check_bounds, Matrix, MatrixMut};

/// A shared transposed view: `view[i, j]` is `inner[j, i]`.
///
/// The view borrows the wrapped matrix; the borrow checker keeps it from
/// outliving the matrix or overlapping a mutation of it.
#[derive(Debug, Clone, Copy)]
pub struct Transposed<'m, M> {
    inner: &'m M,
}

impl<'m, M> Transposed<'m, M> {
    pub fn new(inner: &'m M) -> Self {
        Self { inner }
    }

    /// The wrapped matrix.
    pub fn inner(&self) -> &'m M {
        self.inner
    }
}

impl<'m, T: Field, M: Matrix<T>> Matrix<T> for Transposed<'m, M> {
    // Extraction cost is inherited from the wrapped matrix: a row of the
    // view is a column of the wrapped matrix, in whatever view kind the
    // wrapped layout naturally produces.
    type Row<'a> = M::Col<'m>
    where
        Self: 'a;
    type Col<'a> = M::Row<'m>
    where
        Self: 'a;
    type Transpose<'a> = &'m M
    where
        Self: 'a;
    type Owned = M::Owned;

    fn dims(&self) -> (usize, usize) {
        let (rows, cols) = self.inner.dims();
        (cols, rows)
    }

    fn at(&self, i: usize, j: usize) -> T {
        check_bounds(self, i, j);
        self.inner.at(j, i)
    }

    fn row(&self, i: usize) -> Self::Row<'_> {
        self.inner.col(i)
    }

    fn col(&self, j: usize) -> Self::Col<'_> {
        self.inner.row(j)
    }

    fn transpose(&self) -> Self::Transpose<'_> {
        self.inner
    }
}

/// An exclusive transposed view: reads and writes both delegate with
/// swapped coordinates.
#[derive(Debug)]
pub struct TransposedMut<'m, M> {
    inner: &'m mut M,
}

impl<'m, M> TransposedMut<'m, M> {
    pub fn new(inner: &'m mut M) -> Self {
        Self { inner }
    }

    /// Recover the exclusive borrow of the wrapped matrix.
    pub fn into_inner(self) -> &'m mut M {
        self.inner
    }
}

impl<'m, T: Field, M: MatrixMut<T>> Matrix<T> for TransposedMut<'m, M> {
    type Row<'a> = M::Col<'a>
    where
        Self: 'a;
    type Col<'a> = M::Row<'a>
    where
        Self: 'a;
    type Transpose<'a> = &'a M
    where
        Self: 'a;
    type Owned = M::Owned;

    fn dims(&self) -> (usize, usize) {
        let (rows, cols) = self.inner.dims();
        (cols, rows)
    }

    fn at(&self, i: usize, j: usize) -> T {
        check_bounds(self, i, j);
        self.inner.at(j, i)
    }

    fn row(&self, i: usize) -> Self::Row<'_> {
        self.inner.col(i)
    }

    fn col(&self, j: usize) -> Self::Col<'_> {
        self.inner.row(j)
    }

    fn transpose(&self) -> Self::Transpose<'_> {
        &*self.inner
    }
}

impl<'m, T: Field, M: MatrixMut<T>> MatrixMut<T> for TransposedMut<'m, M> {
    fn set(&mut self, i: usize, j: usize, v: T) {
        check_bounds(self, i, j);
        self.inner.set(j, i, v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::{ColMajorMatrix, RowMajorMatrix};
    use crate::matrix::FromShape;
    use crate::vector::VectorRef;

    fn fill(i: usize, j: usize) -> f64 {
        (10 * i + j) as f64
    }

    #[test]
    fn test_swapped_access() {
        let m = RowMajorMatrix::from_fn(2, 3, fill);
        let t = m.transpose();
        assert_eq!(t.dims(), (3, 2));
        for i in 0..3 {
            for j in 0..2 {
                assert_eq!(t.at(i, j), m.at(j, i));
            }
        }
    }

    #[test]
    fn test_row_of_view_is_col_of_inner() {
        let m = ColMajorMatrix::from_fn(3, 2, fill);
        let t = m.transpose();
        // Row 1 of the view is column 1 of the matrix; column-major hands
        // out a contiguous slice for it.
        assert_eq!(t.row(1).as_slice(), m.col(1).as_slice());
        assert_eq!(t.col(2).len(), 2);
        for j in 0..2 {
            assert_eq!(t.col(2).at(j), m.row(2).at(j));
        }
    }

    #[test]
    fn test_self_inverse_is_same_object() {
        let m = RowMajorMatrix::from_fn(4, 4, fill);
        let back = m.transpose().transpose();
        assert!(std::ptr::eq(back, &m));

        let cm = ColMajorMatrix::from_fn(2, 5, fill);
        assert!(std::ptr::eq(cm.transpose().transpose(), &cm));
    }

    #[test]
    fn test_transpose_mut_writes_through() {
        let mut m = RowMajorMatrix::<f64>::new(2, 3);
        let mut t = m.transpose_mut();
        assert_eq!(t.dims(), (3, 2));
        t.set(2, 1, 7.0);
        assert_eq!(t.at(2, 1), 7.0);
        assert_eq!(m.at(1, 2), 7.0);
    }

    #[test]
    fn test_view_builders_use_own_dims() {
        // identity/zero of a transposed non-square view must come out in
        // the view's (swapped) shape, not the wrapped matrix's.
        let m = RowMajorMatrix::from_fn(2, 5, fill);
        let t = m.transpose();

        let z = t.zero_like();
        assert_eq!(z.dims(), (5, 2));

        let id = t.identity_like();
        assert_eq!(id.dims(), (5, 2));
        for i in 0..5 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(id.at(i, j), expected);
            }
        }
    }

    #[test]
    #[should_panic(expected = "row index out of bounds: 3 (valid 0..3)")]
    fn test_view_bounds_use_swapped_dims() {
        let m = RowMajorMatrix::<f64>::new(2, 3);
        let t = m.transpose();
        let _ = t.at(3, 0);
    }

    #[test]
    fn test_format_matches_logical_order() {
        let m = RowMajorMatrix::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
        let t = m.transpose();
        assert_eq!(crate::matrix::format_matrix(&t), " 0 3\n 1 4\n 2 5\n");
    }
}
