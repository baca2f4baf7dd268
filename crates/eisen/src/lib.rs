//! # Eisen
//!
//! Exact arithmetic over the Eisenstein integers Z[ω], where ω is a
//! primitive cube root of unity, and over their field of fractions.
//!
//! ## Features
//!
//! - **Exact ring arithmetic**: arbitrary precision `a + bω`
//! - **Lattice rounding**: nearest-point conversion from the complex plane
//! - **Euclidean GCD**: rounded division with strictly descending norms
//! - **Fractions**: auto-reduced `n / d` with exact inversion
//!
//! ## Quick Start
//!
//! ```rust
//! use eisen::prelude::*;
//!
//! let x = EisensteinInteger::new(2, 1);
//! let y = EisensteinInteger::new(22, 4);
//! assert_eq!(x.multiply(&y), EisensteinInteger::new(40, 26));
//!
//! let f = EisensteinFraction::new(x.clone(), y.clone()).unwrap();
//! let one = f.multiply(&f.inverse().unwrap());
//! assert_eq!(one, EisensteinFraction::new(1, 1).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use eisen_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use eisen_rings::{
        gcd, gcd_with_config, Arithmetic, EisensteinError, EisensteinFraction, EisensteinInteger,
        EuclideanDomain, Field, GcdConfig, Ring, Termination,
    };
}
