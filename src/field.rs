//! The scalar capability set required of matrix and vector elements.
//!
//! A [`Field`] supplies the two identities and the four arithmetic
//! operations as pure value-to-value methods, plus equality. The library
//! trusts the implementations to satisfy the field axioms (associativity
//! and commutativity of `plus`/`times`, `minus` as composition with the
//! additive inverse, `divide` as composition with the multiplicative
//! inverse) and does not verify them.

use num_complex::Complex;
use num_traits::{Num, One, Zero};
use std::fmt;

/// An algebraic field element.
///
/// `divide` by the additive identity is undefined for a given field; an
/// implementation may return a sentinel the type supports (IEEE infinity
/// for floats) or fail fatally where no such value exists (GF(2)).
pub trait Field: Copy + fmt::Debug + fmt::Display {
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    fn plus(self, rhs: Self) -> Self;

    fn times(self, rhs: Self) -> Self;

    fn minus(self, rhs: Self) -> Self;

    fn divide(self, rhs: Self) -> Self;

    fn equals(self, rhs: Self) -> bool;
}

macro_rules! impl_field_float {
    ($($t:ty),*) => {$(
        impl Field for $t {
            #[inline(always)]
            fn zero() -> Self {
                <$t as Zero>::zero()
            }

            #[inline(always)]
            fn one() -> Self {
                <$t as One>::one()
            }

            #[inline(always)]
            fn plus(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn times(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline(always)]
            fn minus(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn divide(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline(always)]
            fn equals(self, rhs: Self) -> bool {
                self == rhs
            }
        }
    )*};
}

impl_field_float!(f32, f64);

/// `bool` as GF(2): addition is XOR, multiplication is AND.
///
/// Subtraction coincides with addition (every element is its own additive
/// inverse) and division by `true` with multiplication. Division by
/// `false` is a domain violation and panics.
impl Field for bool {
    #[inline(always)]
    fn zero() -> Self {
        false
    }

    #[inline(always)]
    fn one() -> Self {
        true
    }

    #[inline(always)]
    fn plus(self, rhs: Self) -> Self {
        self != rhs
    }

    #[inline(always)]
    fn times(self, rhs: Self) -> Self {
        self && rhs
    }

    #[inline(always)]
    fn minus(self, rhs: Self) -> Self {
        self != rhs
    }

    #[inline(always)]
    fn divide(self, rhs: Self) -> Self {
        assert!(rhs, "GF(2) divide by zero (false)");
        self && rhs
    }

    #[inline(always)]
    fn equals(self, rhs: Self) -> bool {
        self == rhs
    }
}

impl<T> Field for Complex<T>
where
    T: Num + Copy + PartialOrd + fmt::Debug + fmt::Display,
{
    #[inline(always)]
    fn zero() -> Self {
        <Complex<T> as Zero>::zero()
    }

    #[inline(always)]
    fn one() -> Self {
        <Complex<T> as One>::one()
    }

    #[inline(always)]
    fn plus(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn times(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline(always)]
    fn minus(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline(always)]
    fn divide(self, rhs: Self) -> Self {
        self / rhs
    }

    #[inline(always)]
    fn equals(self, rhs: Self) -> bool {
        self == rhs
    }
}
