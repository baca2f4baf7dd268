//! Algebraic structure traits.
//!
//! The ring hierarchy mirrors the usual textbook tower. On top of it,
//! [`Arithmetic`] exposes every operation under a name so callers never
//! depend on operator syntax.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{EisensteinError, Result};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self^n by repeated squaring.
    fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A ring whose multiplication is commutative.
pub trait CommutativeRing: Ring {}

/// A commutative ring with no zero divisors.
pub trait IntegralDomain: CommutativeRing {}

/// A Euclidean domain supports division with remainder.
///
/// For any a, b with b ≠ 0 there exist q, r with a = b*q + r and either
/// r = 0 or φ(r) < φ(b) for the Euclidean function φ.
pub trait EuclideanDomain: IntegralDomain {
    /// Computes the quotient and remainder of division.
    ///
    /// # Errors
    ///
    /// Returns [`EisensteinError::DivisionByZero`] if `other` is zero.
    fn div_rem(&self, other: &Self) -> Result<(Self, Self)>;

    /// Computes the quotient of division.
    ///
    /// # Errors
    ///
    /// Fails when `other` is zero.
    fn div(&self, other: &Self) -> Result<Self> {
        Ok(self.div_rem(other)?.0)
    }

    /// Computes the remainder of division.
    ///
    /// # Errors
    ///
    /// Fails when `other` is zero.
    fn rem(&self, other: &Self) -> Result<Self> {
        Ok(self.div_rem(other)?.1)
    }

    /// Computes a greatest common divisor.
    ///
    /// # Errors
    ///
    /// Implementations may bound the number of division steps.
    fn gcd(&self, other: &Self) -> Result<Self> {
        let mut a = self.clone();
        let mut b = other.clone();

        while !b.is_zero() {
            let r = a.rem(&b)?;
            a = b;
            b = r;
        }

        Ok(a)
    }

    /// Computes a least common multiple, unique up to a unit.
    ///
    /// Zero if either input is zero. Otherwise `self / gcd` is exact, so
    /// the result is `self * other / gcd` with no rounding.
    ///
    /// # Errors
    ///
    /// Propagates failures of `gcd` and `div`.
    fn lcm(&self, other: &Self) -> Result<Self> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero());
        }
        let g = self.gcd(other)?;
        Ok(self.div(&g)? * other.clone())
    }

    /// Extended Euclidean algorithm.
    ///
    /// Returns (gcd, x, y) such that gcd = self*x + other*y.
    ///
    /// # Errors
    ///
    /// Propagates failures of `div_rem`.
    fn extended_gcd(&self, other: &Self) -> Result<(Self, Self, Self)>;
}

/// A field is a ring where every non-zero element has a multiplicative inverse.
pub trait Field: Ring {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Errors
    ///
    /// Returns [`EisensteinError::DivisionByZero`] if `other` is zero.
    fn field_div(&self, other: &Self) -> Result<Self> {
        let inv = other.inv().ok_or(EisensteinError::DivisionByZero)?;
        Ok(self.clone() * inv)
    }
}

/// Named arithmetic shared by Eisenstein integers and fractions.
///
/// Operator impls on the concrete types delegate here.
pub trait Arithmetic: Sized {
    /// The type produced by exact division.
    type Quotient;

    /// Returns `self + other`.
    fn add(&self, other: &Self) -> Self;

    /// Returns `self - other`.
    fn subtract(&self, other: &Self) -> Self;

    /// Returns `self * other`.
    fn multiply(&self, other: &Self) -> Self;

    /// Returns the exact quotient `self / other`.
    ///
    /// # Errors
    ///
    /// Returns [`EisensteinError::DivisionByZero`] if `other` is zero.
    fn divide(&self, other: &Self) -> Result<Self::Quotient>;

    /// Returns the lattice-rounded quotient of `self / other`.
    ///
    /// # Errors
    ///
    /// Returns [`EisensteinError::DivisionByZero`] if `other` is zero.
    fn floor_divide(&self, other: &Self) -> Result<Self>;

    /// Returns `self - floor_divide(self, other) * other`.
    ///
    /// # Errors
    ///
    /// Returns [`EisensteinError::DivisionByZero`] if `other` is zero.
    fn modulo(&self, other: &Self) -> Result<Self>;

    /// Returns the magnitude in the complex plane.
    fn abs(&self) -> f64;
}
