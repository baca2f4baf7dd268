//! # eisen-rings
//!
//! Exact arithmetic over the Eisenstein integers Z[ω] and their field of
//! fractions Q(ω).
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `EuclideanDomain`, `Field`, `Arithmetic`
//! - `EisensteinInteger`: `a + bω` with arbitrary precision components
//! - Lattice rounding between the complex plane and Z[ω]
//! - A Euclidean GCD driven by rounded division
//! - `EisensteinFraction`: reduced numerator/denominator pairs
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── CommutativeRing
//!       └── IntegralDomain
//!            └── EuclideanDomain   (EisensteinInteger)
//! Ring
//!  └── Field                       (EisensteinFraction)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod fraction;
pub mod gcd;
pub mod integer;
pub mod lattice;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use error::{EisensteinError, Result};
pub use fraction::EisensteinFraction;
pub use gcd::{extended_gcd, gcd, gcd_with_config, GcdConfig, Termination};
pub use integer::EisensteinInteger;
pub use lattice::{dot_product, from_complex, remainder, rounded_divide};
pub use traits::{Arithmetic, CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring};
