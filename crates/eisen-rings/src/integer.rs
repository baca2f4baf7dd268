//! Eisenstein integers Z[ω].
//!
//! An Eisenstein integer is a value `a + bω` with `a, b ∈ ℤ`, where
//! `ω = (-1 + i√3) / 2` is a primitive cube root of unity. The only
//! identity needed for arithmetic is `ω² = -1 - ω`.

use std::fmt;
use std::str::FromStr;

use dashu::integer::IBig;
use num_complex::Complex64;

use crate::error::{EisensteinError, Result};
use crate::fraction::EisensteinFraction;
use crate::gcd;
use crate::lattice::{self, SQRT_3};
use crate::traits::{Arithmetic, CommutativeRing, EuclideanDomain, IntegralDomain, Ring};

/// An Eisenstein integer `a + bω` with arbitrary precision components.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct EisensteinInteger {
    a: IBig,
    b: IBig,
}

impl EisensteinInteger {
    /// Creates `a + bω`.
    #[must_use]
    pub fn new(a: impl Into<IBig>, b: impl Into<IBig>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// Upgrades a rational integer `n` to `n + 0ω`.
    #[must_use]
    pub fn from_integer(n: impl Into<IBig>) -> Self {
        Self::new(n, IBig::ZERO)
    }

    /// Creates `a + bω` from floating point components.
    ///
    /// # Errors
    ///
    /// Returns [`EisensteinError::InvalidArgument`] if either component is
    /// not a finite integral value. Integral values of any magnitude are
    /// converted exactly.
    pub fn from_f64_parts(a: f64, b: f64) -> Result<Self> {
        Ok(Self::new(ibig_from_integral_f64(a)?, ibig_from_integral_f64(b)?))
    }

    /// The primitive cube root of unity ω.
    #[must_use]
    pub fn omega() -> Self {
        Self::new(IBig::ZERO, IBig::ONE)
    }

    /// The rational component `a`.
    #[must_use]
    pub fn a(&self) -> &IBig {
        &self.a
    }

    /// The ω component `b`.
    #[must_use]
    pub fn b(&self) -> &IBig {
        &self.b
    }

    /// The algebraic norm `a² - ab + b²`.
    ///
    /// Always non-negative and equal to the squared modulus of
    /// [`to_complex`](Self::to_complex). The norm is multiplicative.
    #[must_use]
    pub fn norm(&self) -> IBig {
        &self.a * &self.a - &self.a * &self.b + &self.b * &self.b
    }

    /// The Euclidean length `sqrt(norm)`.
    ///
    /// Derived from the exact integer norm, so units have modulus exactly 1.
    #[must_use]
    pub fn modulus(&self) -> f64 {
        ibig_to_f64(&self.norm()).sqrt()
    }

    /// Maps `a + bω` to `(a - b/2) + i(b√3/2)`.
    #[must_use]
    pub fn to_complex(&self) -> Complex64 {
        let a = ibig_to_f64(&self.a);
        let b = ibig_to_f64(&self.b);
        Complex64::new(a - b / 2.0, b * SQRT_3 / 2.0)
    }

    /// The complex conjugate `(a - b) - bω`.
    ///
    /// `self * self.conjugate()` equals `norm(self)`.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self {
            a: &self.a - &self.b,
            b: -&self.b,
        }
    }

    /// Returns true if this is `0 + 0ω`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.a == IBig::ZERO && self.b == IBig::ZERO
    }

    /// Returns true if this element has norm 1.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.norm() == IBig::ONE
    }

    /// The six units, as successive powers of the sixth root of unity `1 + ω`.
    #[must_use]
    pub fn units() -> [Self; 6] {
        [
            Self::new(1, 0),
            Self::new(1, 1),
            Self::new(0, 1),
            Self::new(-1, 0),
            Self::new(-1, -1),
            Self::new(0, -1),
        ]
    }

    /// The six associates `u * self`, in the order of [`units`](Self::units).
    #[must_use]
    pub fn associates(&self) -> [Self; 6] {
        Self::units().map(|u| u.multiply(self))
    }

    /// Returns true if `divisor` divides `self` exactly.
    ///
    /// Zero divides only zero.
    #[must_use]
    pub fn is_divisible_by(&self, divisor: &Self) -> bool {
        if divisor.is_zero() {
            return self.is_zero();
        }
        lattice::remainder_nonzero(self, divisor).is_zero()
    }
}

impl Arithmetic for EisensteinInteger {
    type Quotient = EisensteinFraction;

    fn add(&self, other: &Self) -> Self {
        Self {
            a: &self.a + &other.a,
            b: &self.b + &other.b,
        }
    }

    fn subtract(&self, other: &Self) -> Self {
        Self {
            a: &self.a - &other.a,
            b: &self.b - &other.b,
        }
    }

    // (a + bω)(c + dω) = (ac - bd) + (bc + ad - bd)ω
    fn multiply(&self, other: &Self) -> Self {
        let bd = &self.b * &other.b;
        Self {
            a: &self.a * &other.a - &bd,
            b: &self.b * &other.a + &self.a * &other.b - bd,
        }
    }

    fn divide(&self, other: &Self) -> Result<EisensteinFraction> {
        EisensteinFraction::new(self.clone(), other.clone())
    }

    fn floor_divide(&self, other: &Self) -> Result<Self> {
        lattice::rounded_divide(self, other)
    }

    fn modulo(&self, other: &Self) -> Result<Self> {
        lattice::remainder(self, other)
    }

    fn abs(&self) -> f64 {
        self.modulus()
    }
}

impl Ring for EisensteinInteger {
    fn zero() -> Self {
        Self::default()
    }

    fn one() -> Self {
        Self::from_integer(IBig::ONE)
    }

    fn is_zero(&self) -> bool {
        EisensteinInteger::is_zero(self)
    }

    fn is_one(&self) -> bool {
        self.a == IBig::ONE && self.b == IBig::ZERO
    }
}

impl CommutativeRing for EisensteinInteger {}
impl IntegralDomain for EisensteinInteger {}

impl EuclideanDomain for EisensteinInteger {
    fn div_rem(&self, other: &Self) -> Result<(Self, Self)> {
        let q = lattice::rounded_divide(self, other)?;
        let r = self.subtract(&q.multiply(other));
        Ok((q, r))
    }

    fn gcd(&self, other: &Self) -> Result<Self> {
        Ok(gcd::gcd(self, other))
    }

    fn extended_gcd(&self, other: &Self) -> Result<(Self, Self, Self)> {
        Ok(gcd::extended_gcd(self, other))
    }
}

impl std::ops::Add for EisensteinInteger {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Arithmetic::add(&self, &rhs)
    }
}

impl std::ops::Add for &EisensteinInteger {
    type Output = EisensteinInteger;

    fn add(self, rhs: Self) -> Self::Output {
        Arithmetic::add(self, rhs)
    }
}

impl std::ops::Sub for EisensteinInteger {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl std::ops::Sub for &EisensteinInteger {
    type Output = EisensteinInteger;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl std::ops::Mul for EisensteinInteger {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul for &EisensteinInteger {
    type Output = EisensteinInteger;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl std::ops::Neg for EisensteinInteger {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            a: -self.a,
            b: -self.b,
        }
    }
}

impl std::ops::Neg for &EisensteinInteger {
    type Output = EisensteinInteger;

    fn neg(self) -> Self::Output {
        EisensteinInteger {
            a: -&self.a,
            b: -&self.b,
        }
    }
}

impl num_traits::Zero for EisensteinInteger {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        EisensteinInteger::is_zero(self)
    }
}

impl num_traits::One for EisensteinInteger {
    fn one() -> Self {
        Self::from_integer(IBig::ONE)
    }
}

impl From<i64> for EisensteinInteger {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<i32> for EisensteinInteger {
    fn from(value: i32) -> Self {
        Self::from_integer(value)
    }
}

impl From<IBig> for EisensteinInteger {
    fn from(value: IBig) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Debug for EisensteinInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EisensteinInteger({}, {})", self.a, self.b)
    }
}

impl fmt::Display for EisensteinInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}w)", self.a, self.b)
    }
}

/// Parses the display form `"(a, bw)"` or a bare integer `"n"`.
impl FromStr for EisensteinInteger {
    type Err = EisensteinError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let Some(inner) = s.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) else {
            return parse_ibig(s).map(Self::from_integer);
        };

        let (a, b) = inner
            .split_once(',')
            .ok_or_else(|| EisensteinError::invalid(format!("expected \"(a, bw)\", got {s:?}")))?;
        let b = b
            .trim()
            .strip_suffix('w')
            .ok_or_else(|| EisensteinError::invalid(format!("missing ω component in {s:?}")))?;

        Ok(Self::new(parse_ibig(a)?, parse_ibig(b)?))
    }
}

fn parse_ibig(s: &str) -> Result<IBig> {
    let s = s.trim();
    IBig::from_str_radix(s, 10).map_err(|e| EisensteinError::invalid(format!("{s:?}: {e}")))
}

pub(crate) fn ibig_to_f64(value: &IBig) -> f64 {
    value.to_f64().value()
}

const F64_MANTISSA_BITS: u32 = 52;
const F64_EXPONENT_BIAS: i64 = 1075;

/// Converts an integral float to an `IBig` exactly, at any magnitude.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub(crate) fn ibig_from_integral_f64(value: f64) -> Result<IBig> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(EisensteinError::invalid(format!("{value} is not an integer")));
    }
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if (i64::MIN as f64..i64::MAX as f64).contains(&value) {
        return Ok(IBig::from(value as i64));
    }

    // |value| >= 2^63 here, so the value is mantissa * 2^shift with shift > 0.
    let bits = value.to_bits();
    let exponent = i64::try_from((bits >> F64_MANTISSA_BITS) & 0x7ff)
        .map_err(|_| EisensteinError::invalid(format!("{value} has a malformed exponent")))?;
    let mantissa = (bits & ((1u64 << F64_MANTISSA_BITS) - 1)) | (1u64 << F64_MANTISSA_BITS);
    let shift = usize::try_from(exponent - F64_EXPONENT_BIAS)
        .map_err(|_| EisensteinError::invalid(format!("{value} is not an integer")))?;

    let magnitude = IBig::from(mantissa) << shift;
    Ok(if value.is_sign_negative() { -magnitude } else { magnitude })
}
