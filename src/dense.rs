//! Owned dense storage: row-major and column-major layouts.
//!
//! Each layout owns one flat buffer of `rows * cols` elements, sized at
//! construction and never reallocated. The two kinds differ only in the
//! addressing function and in which of row/column extraction is
//! contiguous; every derived operation comes from the [`Matrix`] /
//! [`MatrixMut`] defaults.

use crate::field::Field;
use crate::matrix::{check_bounds, FromShape, Matrix, MatrixMut};
use crate::transpose::{Transposed, TransposedMut};
use crate::vector::{SliceVector, StridedVector};
use std::fmt;

fn alloc_buffer<T: Field>(rows: usize, cols: usize) -> Vec<T> {
    let len = match rows.checked_mul(cols) {
        Some(len) => len,
        None => panic!("matrix shape {rows}x{cols} overflows usize"),
    };
    vec![T::zero(); len]
}

/// Dense storage addressed as `offset = i * cols + j`.
///
/// Rows are contiguous slices; columns are stride-`cols` walks.
#[derive(Debug, Clone)]
pub struct RowMajorMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Field> RowMajorMatrix<T> {
    /// A zero-filled `rows x cols` matrix.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: alloc_buffer(rows, cols),
            rows,
            cols,
        }
    }

    /// The physical buffer, in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// An exclusive transposed view over this matrix.
    pub fn transpose_mut(&mut self) -> TransposedMut<'_, Self> {
        TransposedMut::new(self)
    }
}

impl<T: Field> Matrix<T> for RowMajorMatrix<T> {
    type Row<'a> = SliceVector<'a, T>
    where
        Self: 'a;
    type Col<'a> = StridedVector<'a, T>
    where
        Self: 'a;
    type Transpose<'a> = Transposed<'a, Self>
    where
        Self: 'a;
    type Owned = Self;

    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn at(&self, i: usize, j: usize) -> T {
        check_bounds(self, i, j);
        self.data[i * self.cols + j]
    }

    fn row(&self, i: usize) -> Self::Row<'_> {
        assert!(
            i < self.rows,
            "row index out of bounds: {i} (valid 0..{})",
            self.rows
        );
        let start = i * self.cols;
        SliceVector::new(&self.data[start..start + self.cols])
    }

    fn col(&self, j: usize) -> Self::Col<'_> {
        assert!(
            j < self.cols,
            "column index out of bounds: {j} (valid 0..{})",
            self.cols
        );
        // Empty when rows == 0; the tail slice may then start past the
        // (empty) buffer.
        let tail = self.data.get(j..).unwrap_or(&[]);
        StridedVector::new(tail, self.cols, self.rows)
    }

    fn transpose(&self) -> Self::Transpose<'_> {
        Transposed::new(self)
    }
}

impl<T: Field> MatrixMut<T> for RowMajorMatrix<T> {
    fn set(&mut self, i: usize, j: usize, v: T) {
        check_bounds(self, i, j);
        self.data[i * self.cols + j] = v;
    }
}

impl<T: Field> FromShape<T> for RowMajorMatrix<T> {
    fn zeros(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols)
    }
}

impl<T: Field> fmt::Display for RowMajorMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::matrix::fmt_matrix(f, self)
    }
}

/// Dense storage addressed as `offset = i + j * rows`.
///
/// Columns are contiguous slices; rows are stride-`rows` walks.
#[derive(Debug, Clone)]
pub struct ColMajorMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Field> ColMajorMatrix<T> {
    /// A zero-filled `rows x cols` matrix.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: alloc_buffer(rows, cols),
            rows,
            cols,
        }
    }

    /// The physical buffer, in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// An exclusive transposed view over this matrix.
    pub fn transpose_mut(&mut self) -> TransposedMut<'_, Self> {
        TransposedMut::new(self)
    }
}

impl<T: Field> Matrix<T> for ColMajorMatrix<T> {
    type Row<'a> = StridedVector<'a, T>
    where
        Self: 'a;
    type Col<'a> = SliceVector<'a, T>
    where
        Self: 'a;
    type Transpose<'a> = Transposed<'a, Self>
    where
        Self: 'a;
    type Owned = Self;

    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn at(&self, i: usize, j: usize) -> T {
        check_bounds(self, i, j);
        self.data[i + j * self.rows]
    }

    fn row(&self, i: usize) -> Self::Row<'_> {
        assert!(
            i < self.rows,
            "row index out of bounds: {i} (valid 0..{})",
            self.rows
        );
        let tail = self.data.get(i..).unwrap_or(&[]);
        StridedVector::new(tail, self.rows, self.cols)
    }

    fn col(&self, j: usize) -> Self::Col<'_> {
        assert!(
            j < self.cols,
            "column index out of bounds: {j} (valid 0..{})",
            self.cols
        );
        let start = j * self.rows;
        SliceVector::new(&self.data[start..start + self.rows])
    }

    fn transpose(&self) -> Self::Transpose<'_> {
        Transposed::new(self)
    }
}

impl<T: Field> MatrixMut<T> for ColMajorMatrix<T> {
    fn set(&mut self, i: usize, j: usize, v: T) {
        check_bounds(self, i, j);
        self.data[i + j * self.rows] = v;
    }
}

impl<T: Field> FromShape<T> for ColMajorMatrix<T> {
    fn zeros(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols)
    }
}

impl<T: Field> fmt::Display for ColMajorMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::matrix::fmt_matrix(f, self)
    }
}
