//! Rounding from the complex plane onto the Eisenstein lattice.
//!
//! A point `x + iy` has coordinates `(x + y/√3, 2y/√3)` in the basis
//! `(1, ω)`. The nearest lattice point used throughout this crate rounds
//! each coordinate independently, half to even. Applied to a quotient this
//! leaves a remainder of norm at most `3/4` of the divisor's, so Euclidean
//! descent is strict.
//!
//! Division never goes through floating point: `x / y = x·ȳ / N(y)` has
//! rational lattice coordinates, and those are rounded exactly.

use std::cmp::Ordering;

use dashu::integer::IBig;
use num_complex::Complex64;

use crate::error::{EisensteinError, Result};
use crate::integer::{ibig_from_integral_f64, EisensteinInteger};
use crate::traits::Arithmetic;

/// √3 to double precision.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Rounds `num / den` to the nearest integer, ties to even.
///
/// # Errors
///
/// Returns [`EisensteinError::DivisionByZero`] if `den` is zero.
pub fn round_half_even(num: &IBig, den: &IBig) -> Result<IBig> {
    match den.cmp(&IBig::ZERO) {
        Ordering::Equal => Err(EisensteinError::DivisionByZero),
        Ordering::Greater => Ok(round_half_even_positive(num, den)),
        Ordering::Less => Ok(round_half_even_positive(&-num, &-den)),
    }
}

fn round_half_even_positive(num: &IBig, den: &IBig) -> IBig {
    debug_assert!(*den > IBig::ZERO);

    let mut q = num / den;
    let mut r = num % den;
    if r < IBig::ZERO {
        q = q - IBig::ONE;
        r = r + den;
    }

    let twice_r = &r + &r;
    match twice_r.cmp(den) {
        Ordering::Less => q,
        Ordering::Greater => q + IBig::ONE,
        Ordering::Equal => {
            if &q % IBig::from(2) == IBig::ZERO {
                q
            } else {
                q + IBig::ONE
            }
        }
    }
}

/// Returns the lattice point nearest to `z`.
///
/// # Errors
///
/// Returns [`EisensteinError::InvalidArgument`] if `z` is not finite.
/// Finite points of any magnitude map to a lattice point.
pub fn from_complex(z: Complex64) -> Result<EisensteinInteger> {
    if !z.re.is_finite() || !z.im.is_finite() {
        return Err(EisensteinError::invalid(format!("{z} is not a finite point")));
    }

    let a = (z.re + z.im / SQRT_3).round_ties_even();
    let b = (2.0 * z.im / SQRT_3).round_ties_even();
    Ok(EisensteinInteger::new(
        ibig_from_integral_f64(a)?,
        ibig_from_integral_f64(b)?,
    ))
}

/// The quotient `x / y` rounded onto the lattice.
///
/// This is an exact rendering of `from_complex(x.to_complex() / y.to_complex())`,
/// not a call through it. Each lattice coordinate of `x * conj(y) / N(y)` is
/// rounded half to even in integer arithmetic, so no floating point error
/// can move a coordinate across a rounding boundary.
///
/// # Errors
///
/// Returns [`EisensteinError::DivisionByZero`] if `y` is zero.
pub fn rounded_divide(x: &EisensteinInteger, y: &EisensteinInteger) -> Result<EisensteinInteger> {
    if y.is_zero() {
        return Err(EisensteinError::DivisionByZero);
    }
    Ok(quotient_nonzero(x, y))
}

/// The remainder `x - rounded_divide(x, y) * y`.
///
/// # Errors
///
/// Returns [`EisensteinError::DivisionByZero`] if `y` is zero.
pub fn remainder(x: &EisensteinInteger, y: &EisensteinInteger) -> Result<EisensteinInteger> {
    if y.is_zero() {
        return Err(EisensteinError::DivisionByZero);
    }
    Ok(remainder_nonzero(x, y))
}

/// Rounded quotient for a divisor already known to be nonzero.
pub(crate) fn quotient_nonzero(x: &EisensteinInteger, y: &EisensteinInteger) -> EisensteinInteger {
    let n = y.norm();
    let p = x.multiply(&y.conjugate());
    EisensteinInteger::new(
        round_half_even_positive(p.a(), &n),
        round_half_even_positive(p.b(), &n),
    )
}

pub(crate) fn remainder_nonzero(x: &EisensteinInteger, y: &EisensteinInteger) -> EisensteinInteger {
    x.subtract(&quotient_nonzero(x, y).multiply(y))
}

/// Dot product of `x` and `y` viewed as vectors in the plane.
#[must_use]
pub fn dot_product(x: &EisensteinInteger, y: &EisensteinInteger) -> f64 {
    let u = x.to_complex();
    let v = y.to_complex();
    u.re * v.re + u.im * v.im
}

/// Twice the plane dot product, computed exactly: `2ac + 2bd - ad - bc`.
#[must_use]
pub fn dot_product_doubled(x: &EisensteinInteger, y: &EisensteinInteger) -> IBig {
    let ac = x.a() * y.a();
    let bd = x.b() * y.b();
    &ac + &ac + &bd + &bd - x.a() * y.b() - x.b() * y.a()
}
