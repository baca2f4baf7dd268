//! The field of fractions of the Eisenstein integers, Q(ω).
//!
//! A fraction is stored as a numerator/denominator pair of
//! [`EisensteinInteger`]s, divided through by their gcd at construction.
//! Only the common factor is removed: the stored pair is one of several
//! unit-associate representations of the same value, so `==` compares
//! representations and [`EisensteinFraction::value_eq`] compares values.

use std::fmt;

use dashu::base::UnsignedAbs;
use dashu::integer::IBig;
use dashu::rational::RBig;
use num_complex::Complex64;
use tracing::debug;

use crate::error::{EisensteinError, Result};
use crate::gcd::gcd;
use crate::integer::EisensteinInteger;
use crate::lattice;
use crate::traits::{Arithmetic, CommutativeRing, Field, IntegralDomain, Ring};

/// An element `n / d` of Q(ω), kept in reduced form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EisensteinFraction {
    numerator: EisensteinInteger,
    denominator: EisensteinInteger,
}

impl EisensteinFraction {
    /// Creates the reduced fraction `numerator / denominator`.
    ///
    /// Either argument may be a rational integer or an Eisenstein integer.
    ///
    /// # Errors
    ///
    /// Returns [`EisensteinError::DivisionByZero`] if the denominator is zero.
    pub fn new(
        numerator: impl Into<EisensteinInteger>,
        denominator: impl Into<EisensteinInteger>,
    ) -> Result<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(EisensteinError::DivisionByZero);
        }
        Ok(Self::reduced(numerator.into(), denominator))
    }

    /// Creates `n / 1`.
    #[must_use]
    pub fn from_integer(n: impl Into<EisensteinInteger>) -> Self {
        Self {
            numerator: n.into(),
            denominator: EisensteinInteger::one(),
        }
    }

    /// Creates `a + bω` from rational coefficients
    /// `a = a_num / a_den` and `b = b_num / b_den`.
    ///
    /// # Errors
    ///
    /// Returns [`EisensteinError::DivisionByZero`] if either denominator is zero.
    pub fn from_rational_parts(
        a_num: impl Into<IBig>,
        a_den: impl Into<IBig>,
        b_num: impl Into<IBig>,
        b_den: impl Into<IBig>,
    ) -> Result<Self> {
        let a_den = a_den.into();
        let b_den = b_den.into();
        if a_den == IBig::ZERO || b_den == IBig::ZERO {
            return Err(EisensteinError::DivisionByZero);
        }

        let numerator = EisensteinInteger::new(a_num.into() * &b_den, b_num.into() * &a_den);
        Self::new(numerator, EisensteinInteger::from_integer(a_den * b_den))
    }

    // Caller guarantees a nonzero denominator.
    fn reduced(numerator: EisensteinInteger, denominator: EisensteinInteger) -> Self {
        let g = gcd(&numerator, &denominator);
        if g.is_zero() {
            return Self {
                numerator,
                denominator,
            };
        }
        if !g.is_unit() {
            debug!(%numerator, %denominator, common = %g, "reducing fraction");
        }

        Self {
            numerator: lattice::quotient_nonzero(&numerator, &g),
            denominator: lattice::quotient_nonzero(&denominator, &g),
        }
    }

    /// The stored numerator.
    #[must_use]
    pub fn numerator(&self) -> &EisensteinInteger {
        &self.numerator
    }

    /// The stored denominator.
    #[must_use]
    pub fn denominator(&self) -> &EisensteinInteger {
        &self.denominator
    }

    /// Returns the multiplicative inverse.
    ///
    /// Uses `1/(a + bω) = ((a - b) - bω) / (a² - ab + b²)`, which is exact.
    ///
    /// # Errors
    ///
    /// Returns [`EisensteinError::DivisionByZero`] if `self` is zero.
    pub fn inverse(&self) -> Result<Self> {
        if self.numerator.is_zero() {
            return Err(EisensteinError::DivisionByZero);
        }

        let norm = EisensteinInteger::from_integer(self.numerator.norm());
        let numerator = self.numerator.conjugate().multiply(&self.denominator);
        Ok(Self::reduced(numerator, norm))
    }

    /// Compares values by cross-multiplication, ignoring which associate
    /// each side stores.
    #[must_use]
    pub fn value_eq(&self, other: &Self) -> bool {
        self.numerator.multiply(&other.denominator) == other.numerator.multiply(&self.denominator)
    }

    /// The exact norm `N(n) / N(d)`.
    #[must_use]
    pub fn norm(&self) -> RBig {
        RBig::from_parts(self.numerator.norm(), self.denominator.norm().unsigned_abs())
    }

    /// The Euclidean length in the complex plane.
    #[must_use]
    pub fn modulus(&self) -> f64 {
        self.numerator.modulus() / self.denominator.modulus()
    }

    /// Maps the value into the complex plane.
    #[must_use]
    pub fn to_complex(&self) -> Complex64 {
        self.numerator.to_complex() / self.denominator.to_complex()
    }

    /// Plane dot product with another fraction.
    #[must_use]
    pub fn dot_product(&self, other: &Self) -> f64 {
        let u = self.to_complex();
        let v = other.to_complex();
        u.re * v.re + u.im * v.im
    }

    /// Returns true if the value lies in Z[ω].
    ///
    /// A reduced fraction is integral exactly when its denominator is a unit.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        self.denominator.is_unit()
    }

    /// Returns the value as an Eisenstein integer when it is integral.
    #[must_use]
    pub fn to_integer(&self) -> Option<EisensteinInteger> {
        // The inverse of a unit is its conjugate.
        self.is_integral()
            .then(|| self.numerator.multiply(&self.denominator.conjugate()))
    }
}

impl Arithmetic for EisensteinFraction {
    type Quotient = Self;

    fn add(&self, other: &Self) -> Self {
        let numerator = self
            .numerator
            .multiply(&other.denominator)
            .add(&other.numerator.multiply(&self.denominator));
        Self::reduced(numerator, self.denominator.multiply(&other.denominator))
    }

    fn subtract(&self, other: &Self) -> Self {
        let numerator = self
            .numerator
            .multiply(&other.denominator)
            .subtract(&other.numerator.multiply(&self.denominator));
        Self::reduced(numerator, self.denominator.multiply(&other.denominator))
    }

    fn multiply(&self, other: &Self) -> Self {
        Self::reduced(
            self.numerator.multiply(&other.numerator),
            self.denominator.multiply(&other.denominator),
        )
    }

    fn divide(&self, other: &Self) -> Result<Self> {
        Ok(self.multiply(&other.inverse()?))
    }

    fn floor_divide(&self, other: &Self) -> Result<Self> {
        if other.numerator.is_zero() {
            return Err(EisensteinError::DivisionByZero);
        }
        let q = lattice::quotient_nonzero(
            &self.numerator.multiply(&other.denominator),
            &self.denominator.multiply(&other.numerator),
        );
        Ok(Self::from_integer(q))
    }

    fn modulo(&self, other: &Self) -> Result<Self> {
        let q = self.floor_divide(other)?;
        Ok(self.subtract(&q.multiply(other)))
    }

    fn abs(&self) -> f64 {
        self.modulus()
    }
}

impl Ring for EisensteinFraction {
    fn zero() -> Self {
        Self::from_integer(EisensteinInteger::zero())
    }

    fn one() -> Self {
        Self::from_integer(EisensteinInteger::one())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }
}

impl CommutativeRing for EisensteinFraction {}
impl IntegralDomain for EisensteinFraction {}

impl Field for EisensteinFraction {
    fn inv(&self) -> Option<Self> {
        self.inverse().ok()
    }
}

impl std::ops::Add for EisensteinFraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Arithmetic::add(&self, &rhs)
    }
}

impl std::ops::Sub for EisensteinFraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl std::ops::Mul for EisensteinFraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl std::ops::Neg for EisensteinFraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl From<EisensteinInteger> for EisensteinFraction {
    fn from(value: EisensteinInteger) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for EisensteinFraction {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Debug for EisensteinFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EisensteinFraction({:?} / {:?})", self.numerator, self.denominator)
    }
}

impl fmt::Display for EisensteinFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}/{})", self.numerator, self.denominator)
    }
}
