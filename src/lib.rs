//! Dense matrices and vectors over an abstract algebraic field.
//!
//! The crate decouples a matrix's logical `(row, col)` indexing from its
//! physical memory layout. Two storage kinds — [`RowMajorMatrix`] and
//! [`ColMajorMatrix`] — own a flat buffer and an addressing function;
//! everything above that level is expressed against the minimal
//! [`Matrix`] interface (`dims`, `at`, `row`, `col`, `transpose`) and so
//! runs unmodified over either layout, or over a zero-copy
//! [`Transposed`] view of either.
//!
//! # Core Types
//!
//! - [`Field`]: the capability set a scalar element type must supply
//!   (identities, the four arithmetic operations, equality). Implemented
//!   for `f32`/`f64`, `bool` as GF(2), and `num_complex::Complex`.
//! - [`Matrix`] / [`MatrixMut`] / [`FromShape`]: the read contract, the
//!   mutable extension, and shape-directed construction. All derived
//!   operations (`binary_for_all`, `scalar_times`, `times_vector`,
//!   `equals`, ...) are default bodies over the minimal interface.
//! - [`SliceVector`] / [`StridedVector`] / [`Vector`]: borrowed row and
//!   column views over a matrix's buffer, and the owned result vector.
//! - [`Transposed`] / [`TransposedMut`]: zero-copy transpose views.
//!   Transposing a view hands back the wrapped matrix itself, so a
//!   wrapper chain can never form; the mutable view is only
//!   constructible over a matrix already known to be mutable.
//!
//! # Example
//!
//! ```rust
//! use fieldmat::{FromShape, Matrix, RowMajorMatrix, ColMajorMatrix, Vector, VectorRef};
//!
//! let rm = RowMajorMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
//! let cm = ColMajorMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
//!
//! // Same logical content despite different physical layouts.
//! assert!(rm.equals(&cm));
//!
//! // Element-wise combination across layouts.
//! let sum = rm.binary_for_all(&cm, |a, b| a + b).unwrap();
//! assert_eq!(sum.at(2, 1), 14.0);
//!
//! // Zero-copy transpose; transposing twice is the original reference.
//! let t = rm.transpose();
//! assert_eq!(t.at(0, 2), rm.at(2, 0));
//! assert!(std::ptr::eq(t.transpose(), &rm));
//!
//! let v = Vector::from_fn(3, |i| (i + 1) as f64);
//! let mv = rm.times_vector(&v).unwrap();
//! assert_eq!(mv.at(0), 8.0); // inner([1,2,3], [0,1,2])
//! ```
//!
//! # Errors
//!
//! Indexing outside a matrix or vector's valid range is a programming
//! error and panics with the offending index and the valid range, as
//! does constructing a shape whose element count overflows `usize` and
//! dividing by GF(2)'s zero. Shape or length disagreement between two
//! independently built operands is reported as a typed [`MatError`]
//! before any element is touched.

mod dense;
mod field;
mod matrix;
mod transpose;
mod vector;

// ============================================================================
// Field abstraction
// ============================================================================
pub use field::Field;

// ============================================================================
// Vectors
// ============================================================================
pub use vector::{
    format_vector, inner, print_vector, vec_add, vec_equals, SliceVector, StridedVector, Vector,
    VectorRef,
};

// ============================================================================
// Matrices
// ============================================================================
pub use matrix::{
    check_bounds, ensure_same_dims, format_matrix, matrix_equals, print_matrix, FromShape,
    Matrix, MatrixMut,
};

pub use dense::{ColMajorMatrix, RowMajorMatrix};
pub use transpose::{Transposed, TransposedMut};

// ============================================================================
// Error types
// ============================================================================

/// Errors reported for structurally incompatible operands.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MatError {
    /// Binary element-wise operation on matrices with differing dims.
    #[error("shape mismatch: {}x{} vs {}x{}", left.0, left.1, right.0, right.1)]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Binary vector operation on vectors with differing lengths.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Result type for matrix and vector operations.
pub type Result<T> = std::result::Result<T, MatError>;
