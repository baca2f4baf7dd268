//! Euclidean GCD on the Eisenstein lattice.
//!
//! The remainder sequence uses [`lattice::remainder`](crate::lattice::remainder),
//! whose norm is at most 3/4 of the divisor's, so the loop terminates.
//! Results are unique only up to one of the six units; no associate is
//! preferred.

use dashu::integer::IBig;
use tracing::{debug, trace, warn};

use crate::error::{EisensteinError, Result};
use crate::integer::EisensteinInteger;
use crate::lattice;
use crate::traits::{Arithmetic, Ring};

/// How the Euclidean loop decides that the remainder sequence has ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Termination {
    /// Stop when the current divisor is `0 + 0ω`, tested on its components.
    #[default]
    Exact,
    /// Stop when the floating point plane dot product of the current pair
    /// is zero.
    ///
    /// This also stops on a nonzero pair that happens to be orthogonal
    /// (e.g. `1` and `1 + 2ω`), returning a value that is not a gcd.
    DotProduct,
}

impl Termination {
    fn should_continue(self, x: &EisensteinInteger, y: &EisensteinInteger) -> bool {
        match self {
            Self::Exact => !y.is_zero(),
            Self::DotProduct => lattice::dot_product(x, y) != 0.0,
        }
    }
}

/// Configuration for [`gcd_with_config`].
#[derive(Clone, Debug)]
pub struct GcdConfig {
    /// Loop condition.
    pub termination: Termination,
    /// Maximum number of division steps (0 = no limit).
    pub max_iterations: usize,
}

impl Default for GcdConfig {
    fn default() -> Self {
        Self {
            termination: Termination::Exact,
            max_iterations: 0,
        }
    }
}

/// Computes a greatest common divisor of `x` and `y`.
///
/// Returns zero when both inputs are zero.
#[must_use]
pub fn gcd(x: &EisensteinInteger, y: &EisensteinInteger) -> EisensteinInteger {
    if x.is_zero() && y.is_zero() {
        return EisensteinInteger::zero();
    }

    let (mut x, mut y) = ordered_by_norm(x, y);
    let mut steps = 0usize;
    while !y.is_zero() {
        let r = lattice::remainder_nonzero(&x, &y);
        trace!(step = steps, norm_x = %x.norm(), norm_y = %y.norm(), "euclidean step");
        x = y;
        y = r;
        steps += 1;
    }

    debug!(steps, gcd = %x, "gcd converged");
    x
}

/// Computes a greatest common divisor under an explicit configuration.
///
/// # Errors
///
/// Returns [`EisensteinError::GcdDidNotConverge`] if the loop runs past
/// `config.max_iterations`.
pub fn gcd_with_config(
    x: &EisensteinInteger,
    y: &EisensteinInteger,
    config: &GcdConfig,
) -> Result<EisensteinInteger> {
    if x.is_zero() && y.is_zero() {
        return Ok(EisensteinInteger::zero());
    }

    let (mut x, mut y) = ordered_by_norm(x, y);
    let mut steps = 0usize;
    while config.termination.should_continue(&x, &y) {
        if config.max_iterations != 0 && steps >= config.max_iterations {
            warn!(steps, x = %x, y = %y, "gcd iteration limit reached");
            return Err(EisensteinError::GcdDidNotConverge(steps));
        }
        let r = lattice::remainder(&x, &y)?;
        trace!(step = steps, norm_x = %x.norm(), norm_y = %y.norm(), "euclidean step");
        x = y;
        y = r;
        steps += 1;
    }

    debug!(steps, gcd = %x, termination = ?config.termination, "gcd converged");
    Ok(x)
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, s, t)` with `g = s*x + t*y`, where `g` is a gcd of `x`
/// and `y`.
#[must_use]
pub fn extended_gcd(
    x: &EisensteinInteger,
    y: &EisensteinInteger,
) -> (EisensteinInteger, EisensteinInteger, EisensteinInteger) {
    let mut old_r = x.clone();
    let mut r = y.clone();
    let mut old_s = EisensteinInteger::one();
    let mut s = EisensteinInteger::zero();
    let mut old_t = EisensteinInteger::zero();
    let mut t = EisensteinInteger::one();

    while !r.is_zero() {
        let q = lattice::quotient_nonzero(&old_r, &r);

        let new_r = old_r.subtract(&q.multiply(&r));
        old_r = r;
        r = new_r;

        let new_s = old_s.subtract(&q.multiply(&s));
        old_s = s;
        s = new_s;

        let new_t = old_t.subtract(&q.multiply(&t));
        old_t = t;
        t = new_t;
    }

    (old_r, old_s, old_t)
}

/// Returns true if `x` and `y` share no non-unit factor.
#[must_use]
pub fn are_coprime(x: &EisensteinInteger, y: &EisensteinInteger) -> bool {
    gcd(x, y).norm() == IBig::ONE
}

fn ordered_by_norm(
    x: &EisensteinInteger,
    y: &EisensteinInteger,
) -> (EisensteinInteger, EisensteinInteger) {
    if y.norm() > x.norm() {
        (y.clone(), x.clone())
    } else {
        (x.clone(), y.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(a: i64, b: i64) -> EisensteinInteger {
        EisensteinInteger::new(a, b)
    }

    #[test]
    fn test_gcd_of_multiples() {
        let g = e(2, 1);
        let x = g.multiply(&e(3, -1));
        let y = g.multiply(&e(2, 0));
        let d = gcd(&x, &y);

        assert!(x.is_divisible_by(&d));
        assert!(y.is_divisible_by(&d));
        // 3 - ω has norm 13 and 2 is prime, so d is an associate of g.
        assert_eq!(d.norm(), g.norm());
    }

    #[test]
    fn test_gcd_with_zero() {
        let x = e(4, -3);
        assert_eq!(gcd(&x, &EisensteinInteger::zero()), x);
        assert_eq!(gcd(&EisensteinInteger::zero(), &x), x);
        assert!(gcd(&EisensteinInteger::zero(), &EisensteinInteger::zero()).is_zero());
    }

    #[test]
    fn test_gcd_of_rational_integers() {
        // 3 = -ω²(1 - ω)², so gcd(6, 9) is an associate of 3.
        let d = gcd(&e(6, 0), &e(9, 0));
        assert_eq!(d.norm(), IBig::from(9));
    }

    #[test]
    fn test_coprime() {
        assert!(are_coprime(&e(2, 0), &e(3, 0)));
        assert!(!are_coprime(&e(3, 0), &e(2, 1)));
    }

    #[test]
    fn test_config_exact_matches_default() {
        let x = e(31, -7);
        let y = e(12, 19);
        assert_eq!(gcd_with_config(&x, &y, &GcdConfig::default()), Ok(gcd(&x, &y)));
    }

    #[test]
    fn test_dot_product_termination_stops_on_orthogonal_pair() {
        let config = GcdConfig {
            termination: Termination::DotProduct,
            ..GcdConfig::default()
        };
        // 1 + 2ω = i√3 is orthogonal to 1.
        let d = gcd_with_config(&e(1, 0), &e(1, 2), &config).unwrap();
        assert_eq!(d, e(1, 2));
        assert!(gcd(&e(1, 0), &e(1, 2)).is_unit());
    }

    #[test]
    fn test_iteration_limit() {
        let config = GcdConfig {
            max_iterations: 1,
            ..GcdConfig::default()
        };
        // Fibonacci-like pair needing several steps.
        let x = e(89, 0);
        let y = e(55, 0);
        assert!(matches!(
            gcd_with_config(&x, &y, &config),
            Err(EisensteinError::GcdDidNotConverge(1))
        ));
    }

    #[test]
    fn test_extended_gcd() {
        let x = e(17, 5);
        let y = e(-4, 9);
        let (g, s, t) = extended_gcd(&x, &y);

        assert_eq!(s.multiply(&x).add(&t.multiply(&y)), g);
        assert!(x.is_divisible_by(&g));
        assert!(y.is_divisible_by(&g));
    }
}
