//! The logical matrix contract and its derived operations.
//!
//! [`Matrix`] is the minimal interface every matrix kind implements:
//! dimensions, bounds-checked element read, row/column extraction and
//! transposition. Everything else — element-wise combinators, builders,
//! scalar multiply, equality, matrix–vector products, printing — is
//! derived from that interface once, as default trait bodies and free
//! functions, so row-major, column-major and transposed matrices share
//! one set of algorithm bodies. Only `dims`, `at`, `row`, `col` and
//! `set` have layout-specific implementations.
//!
//! [`MatrixMut`] extends the contract with indexed writes and the
//! in-place `set_*` family; [`FromShape`] adds shape-directed
//! construction and is the result type of every allocating derived
//! operation.

use crate::field::Field;
use crate::vector::{ensure_same_len, inner, Vector, VectorRef};
use crate::{MatError, Result};
use std::fmt;

/// Read access to a `rows x cols` grid of field elements.
pub trait Matrix<T: Field> {
    /// The view type handed out for a row. Contiguous or strided
    /// depending on the physical layout.
    type Row<'a>: VectorRef<T>
    where
        Self: 'a;

    /// The view type handed out for a column.
    type Col<'a>: VectorRef<T>
    where
        Self: 'a;

    /// The result of [`transpose`](Matrix::transpose). A transposed view
    /// for storage matrices; the original reference for a view that is
    /// already transposed.
    type Transpose<'a>: Matrix<T>
    where
        Self: 'a;

    /// The owned matrix kind produced by allocating derived operations
    /// (`binary_for_all`, `zero_like`, ...). Carries the receiver's
    /// storage layout.
    type Owned: FromShape<T>;

    /// `(rows, cols)`.
    fn dims(&self) -> (usize, usize);

    /// The element at `(i, j)`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    fn at(&self, i: usize, j: usize) -> T;

    /// A borrowed view of row `i`. Aliases the backing buffer; no copy.
    fn row(&self, i: usize) -> Self::Row<'_>;

    /// A borrowed view of column `j`. Aliases the backing buffer.
    fn col(&self, j: usize) -> Self::Col<'_>;

    /// The zero-copy transpose. Self-inverting: transposing a transposed
    /// view yields the wrapped matrix itself, never a nested wrapper.
    fn transpose(&self) -> Self::Transpose<'_>;

    fn rows(&self) -> usize {
        self.dims().0
    }

    fn cols(&self) -> usize {
        self.dims().1
    }

    /// A fresh matrix with `out[i,j] = f(self[i,j], b[i,j])`.
    ///
    /// The operand may be any matrix kind; it is read purely through
    /// `at`. Differing dims are reported before any element is touched.
    fn binary_for_all<B: Matrix<T>>(
        &self,
        b: &B,
        f: impl Fn(T, T) -> T,
    ) -> Result<Self::Owned>
    where
        Self: Sized,
    {
        ensure_same_dims(self, b)?;
        let (rows, cols) = self.dims();
        let mut out = Self::Owned::zeros(rows, cols);
        out.set_binary_for_all(self, b, f);
        Ok(out)
    }

    /// A fresh matrix with `out[i,j] = f(self[i,j])`.
    fn unary_for_all(&self, f: impl Fn(T) -> T) -> Self::Owned
    where
        Self: Sized,
    {
        let (rows, cols) = self.dims();
        let mut out = Self::Owned::zeros(rows, cols);
        out.set_unary_for_all(self, f);
        out
    }

    /// A fresh zero matrix of the receiver's shape and layout.
    fn zero_like(&self) -> Self::Owned {
        let (rows, cols) = self.dims();
        Self::Owned::zeros(rows, cols)
    }

    /// A fresh matrix of the receiver's shape with ones on the main
    /// diagonal up to `min(rows, cols)` and zeros elsewhere. The
    /// receiver is never touched.
    fn identity_like(&self) -> Self::Owned {
        let (rows, cols) = self.dims();
        let mut out = Self::Owned::zeros(rows, cols);
        for d in 0..rows.min(cols) {
            out.set(d, d, T::one());
        }
        out
    }

    /// A fresh matrix with `out[i,j] = x * self[i,j]`.
    fn scalar_times(&self, x: T) -> Self::Owned {
        let (rows, cols) = self.dims();
        let mut out = Self::Owned::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                out.set(i, j, x.times(self.at(i, j)));
            }
        }
        out
    }

    /// Structural equality under the field's `equals`; `false` on a
    /// dimension mismatch.
    fn equals<B: Matrix<T>>(&self, b: &B) -> bool
    where
        Self: Sized,
    {
        matrix_equals(self, b)
    }

    /// `M · v`: `out[i] = inner(v, row_i)`, one entry per row.
    ///
    /// `v` must have `cols` elements.
    fn times_vector(&self, v: &impl VectorRef<T>) -> Result<Vector<T>> {
        let (rows, cols) = self.dims();
        ensure_same_len(v.len(), cols)?;
        let mut w = Vector::zeros(rows);
        for i in 0..rows {
            w.set(i, inner(v, &self.row(i))?);
        }
        Ok(w)
    }

    /// `(vᵗ · M)ᵗ`: `out[j] = inner(v, col_j)`, one entry per column.
    ///
    /// `v` must have `rows` elements.
    fn left_times_vector(&self, v: &impl VectorRef<T>) -> Result<Vector<T>> {
        let (rows, cols) = self.dims();
        ensure_same_len(v.len(), rows)?;
        let mut w = Vector::zeros(cols);
        for j in 0..cols {
            w.set(j, inner(v, &self.col(j))?);
        }
        Ok(w)
    }
}

/// Write access on top of [`Matrix`].
pub trait MatrixMut<T: Field>: Matrix<T> {
    /// Overwrite the element at `(i, j)`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    fn set(&mut self, i: usize, j: usize, v: T);

    /// In place: `self[i,j] = f(b[i,j], c[i,j])` over the receiver's
    /// shape. `b` and `c` must be at least as large as the receiver; no
    /// dimension check is made here, by design — out-of-range operands
    /// fail at the operand's own bounds check.
    fn set_binary_for_all(
        &mut self,
        b: &impl Matrix<T>,
        c: &impl Matrix<T>,
        f: impl Fn(T, T) -> T,
    ) {
        let (rows, cols) = self.dims();
        for i in 0..rows {
            for j in 0..cols {
                self.set(i, j, f(b.at(i, j), c.at(i, j)));
            }
        }
    }

    /// In place: `self[i,j] = f(b[i,j])` over the receiver's shape.
    fn set_unary_for_all(&mut self, b: &impl Matrix<T>, f: impl Fn(T) -> T) {
        let (rows, cols) = self.dims();
        for i in 0..rows {
            for j in 0..cols {
                self.set(i, j, f(b.at(i, j)));
            }
        }
    }

    /// In place: `self[i,j] = b[i,j]` over the receiver's shape.
    fn set_copy(&mut self, b: &impl Matrix<T>) {
        let (rows, cols) = self.dims();
        for i in 0..rows {
            for j in 0..cols {
                self.set(i, j, b.at(i, j));
            }
        }
    }

    /// In place: `self[i,j] = f(i, j)` over the receiver's shape.
    fn fill_by(&mut self, f: impl Fn(usize, usize) -> T) {
        let (rows, cols) = self.dims();
        for i in 0..rows {
            for j in 0..cols {
                self.set(i, j, f(i, j));
            }
        }
    }
}

/// Shape-directed construction of an owned, mutable matrix.
pub trait FromShape<T: Field>: MatrixMut<T> + Sized {
    /// A zero-filled matrix of the given shape.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    fn zeros(rows: usize, cols: usize) -> Self;

    /// A matrix of the given shape with `m[i,j] = f(i, j)`.
    fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut m = Self::zeros(rows, cols);
        m.fill_by(f);
        m
    }
}

/// Delegating [`Matrix`] for shared references, so a transpose of a
/// transpose can hand back the wrapped `&M` while `transpose` stays an
/// ordinary trait method.
impl<T: Field, M: Matrix<T>> Matrix<T> for &M {
    type Row<'a> = M::Row<'a>
    where
        Self: 'a;
    type Col<'a> = M::Col<'a>
    where
        Self: 'a;
    type Transpose<'a> = M::Transpose<'a>
    where
        Self: 'a;
    type Owned = M::Owned;

    fn dims(&self) -> (usize, usize) {
        (**self).dims()
    }

    fn at(&self, i: usize, j: usize) -> T {
        (**self).at(i, j)
    }

    fn row(&self, i: usize) -> Self::Row<'_> {
        (**self).row(i)
    }

    fn col(&self, j: usize) -> Self::Col<'_> {
        (**self).col(j)
    }

    fn transpose(&self) -> Self::Transpose<'_> {
        (**self).transpose()
    }
}

/// Panic unless `(i, j)` indexes into `m`, naming the offending index
/// and the valid range.
pub fn check_bounds<T: Field>(m: &impl Matrix<T>, i: usize, j: usize) {
    let (rows, cols) = m.dims();
    assert!(i < rows, "row index out of bounds: {i} (valid 0..{rows})");
    assert!(j < cols, "column index out of bounds: {j} (valid 0..{cols})");
}

/// Dims of two operands in a binary element-wise operation must match.
pub fn ensure_same_dims<T: Field>(a: &impl Matrix<T>, b: &impl Matrix<T>) -> Result<()> {
    let left = a.dims();
    let right = b.dims();
    if left != right {
        return Err(MatError::ShapeMismatch { left, right });
    }
    Ok(())
}

/// Structural equality of two matrices of any kinds.
pub fn matrix_equals<T: Field>(a: &impl Matrix<T>, b: &impl Matrix<T>) -> bool {
    let (rows, cols) = a.dims();
    if b.dims() != (rows, cols) {
        return false;
    }
    for i in 0..rows {
        for j in 0..cols {
            if !a.at(i, j).equals(b.at(i, j)) {
                return false;
            }
        }
    }
    true
}

pub(crate) fn fmt_matrix<T: Field>(
    f: &mut fmt::Formatter<'_>,
    m: &impl Matrix<T>,
) -> fmt::Result {
    let (rows, cols) = m.dims();
    for i in 0..rows {
        for j in 0..cols {
            write!(f, " {}", m.at(i, j))?;
        }
        writeln!(f)?;
    }
    Ok(())
}

struct DisplayMatrix<'m, T: Field, M: Matrix<T>>(&'m M, std::marker::PhantomData<T>);

impl<T: Field, M: Matrix<T>> fmt::Display for DisplayMatrix<'_, T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_matrix(f, self.0)
    }
}

/// Render a matrix in row-major traversal order regardless of physical
/// layout: one line per row, each element preceded by a single space,
/// every row newline-terminated.
pub fn format_matrix<T: Field>(m: &impl Matrix<T>) -> String {
    DisplayMatrix(m, std::marker::PhantomData).to_string()
}

/// Print a matrix to stdout in the [`format_matrix`] format.
pub fn print_matrix<T: Field>(m: &impl Matrix<T>) {
    print!("{}", format_matrix(m));
}
