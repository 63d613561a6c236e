//! Vector views and the owned contiguous vector.
//!
//! Two borrowed view kinds cover the ways a matrix hands out its rows and
//! columns without copying: [`SliceVector`] for a unit-stride run and
//! [`StridedVector`] for a run walked with a fixed stride. Both borrow the
//! owning matrix's buffer, so the borrow checker keeps a live view from
//! overlapping any mutation of the source. [`Vector`] is the owned,
//! mutable, contiguous sibling used for computed results.
//!
//! Everything algorithmic (`inner`, `vec_add`, `vec_equals`, formatting)
//! is a free function over the [`VectorRef`] minimal interface, built once
//! and reused by every vector kind.

use crate::field::Field;
use crate::{MatError, Result};
use std::fmt;

/// Read access to a finite ordered sequence of field elements.
pub trait VectorRef<T: Field> {
    /// The logical length of the sequence.
    fn len(&self) -> usize;

    /// The element at logical index `i`.
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    fn at(&self, i: usize) -> T;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A contiguous borrowed run of elements.
#[derive(Debug, Clone, Copy)]
pub struct SliceVector<'a, T> {
    data: &'a [T],
}

impl<'a, T> SliceVector<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    /// The underlying contiguous slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

impl<T: Field> VectorRef<T> for SliceVector<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn at(&self, i: usize) -> T {
        assert!(
            i < self.data.len(),
            "vector index out of bounds: {i} (valid 0..{})",
            self.data.len()
        );
        self.data[i]
    }
}

/// A borrowed run walked with a fixed stride.
///
/// Element `i` lives at buffer offset `i * stride`. A column of a
/// row-major matrix is a strided view with stride `cols`; a row of a
/// column-major matrix has stride `rows`.
#[derive(Debug, Clone, Copy)]
pub struct StridedVector<'a, T> {
    data: &'a [T],
    stride: usize,
    len: usize,
}

impl<'a, T> StridedVector<'a, T> {
    pub fn new(data: &'a [T], stride: usize, len: usize) -> Self {
        Self { data, stride, len }
    }

    /// The stride between consecutive logical elements.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl<T: Field> VectorRef<T> for StridedVector<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn at(&self, i: usize) -> T {
        assert!(
            i < self.len,
            "vector index out of bounds: {i} (valid 0..{})",
            self.len
        );
        self.data[i * self.stride]
    }
}

/// An owned contiguous vector, sized once at construction.
#[derive(Debug, Clone)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Field> Vector<T> {
    /// A zero-filled vector of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self {
            data: vec![T::zero(); n],
        }
    }

    /// A vector of length `n` with `v[i] = f(i)`.
    pub fn from_fn(n: usize, f: impl Fn(usize) -> T) -> Self {
        Self {
            data: (0..n).map(f).collect(),
        }
    }

    /// # Panics
    /// Panics if `i` is out of range.
    pub fn set(&mut self, i: usize, v: T) {
        assert!(
            i < self.data.len(),
            "vector index out of bounds: {i} (valid 0..{})",
            self.data.len()
        );
        self.data[i] = v;
    }

    /// Overwrite every element with `f(i)`.
    pub fn fill_by(&mut self, f: impl Fn(usize) -> T) {
        for (i, x) in self.data.iter_mut().enumerate() {
            *x = f(i);
        }
    }

    /// Borrow as a contiguous view.
    pub fn as_view(&self) -> SliceVector<'_, T> {
        SliceVector::new(&self.data)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Field> VectorRef<T> for Vector<T> {
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn at(&self, i: usize) -> T {
        assert!(
            i < self.data.len(),
            "vector index out of bounds: {i} (valid 0..{})",
            self.data.len()
        );
        self.data[i]
    }
}

pub(crate) fn ensure_same_len(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(MatError::LengthMismatch { left, right });
    }
    Ok(())
}

/// Inner product: the sum of element-wise products under the field's
/// `plus` and `times`.
pub fn inner<T: Field>(v: &impl VectorRef<T>, w: &impl VectorRef<T>) -> Result<T> {
    ensure_same_len(v.len(), w.len())?;
    let mut sum = T::zero();
    for i in 0..v.len() {
        sum = sum.plus(v.at(i).times(w.at(i)));
    }
    Ok(sum)
}

/// Element-wise sum, producing a fresh contiguous vector.
pub fn vec_add<T: Field>(v: &impl VectorRef<T>, w: &impl VectorRef<T>) -> Result<Vector<T>> {
    ensure_same_len(v.len(), w.len())?;
    Ok(Vector::from_fn(v.len(), |i| v.at(i).plus(w.at(i))))
}

/// Structural equality: equal lengths and every element equal under the
/// field's `equals`.
pub fn vec_equals<T: Field>(v: &impl VectorRef<T>, w: &impl VectorRef<T>) -> bool {
    if v.len() != w.len() {
        return false;
    }
    (0..v.len()).all(|i| v.at(i).equals(w.at(i)))
}

pub(crate) fn fmt_vector<T: Field>(
    f: &mut fmt::Formatter<'_>,
    v: &impl VectorRef<T>,
) -> fmt::Result {
    for i in 0..v.len() {
        write!(f, " {}", v.at(i))?;
    }
    writeln!(f)
}

struct DisplayVector<'v, T: Field, V: VectorRef<T>>(&'v V, std::marker::PhantomData<T>);

impl<T: Field, V: VectorRef<T>> fmt::Display for DisplayVector<'_, T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_vector(f, self.0)
    }
}

/// Render a vector as one line: each element preceded by a single space,
/// with a trailing newline.
pub fn format_vector<T: Field>(v: &impl VectorRef<T>) -> String {
    DisplayVector(v, std::marker::PhantomData).to_string()
}

/// Print a vector to stdout in the [`format_vector`] format.
pub fn print_vector<T: Field>(v: &impl VectorRef<T>) {
    print!("{}", format_vector(v));
}

impl<T: Field> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_vector(f, self)
    }
}

impl<T: Field> fmt::Display for SliceVector<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_vector(f, self)
    }
}

impl<T: Field> fmt::Display for StridedVector<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_vector(f, self)
    }
}
