//! # quadra-model
//!
//! Quadratic models and the expression algebra that builds them.
//!
//! This crate provides:
//! - `TermTable`, the canonical offset + linear + quadratic storage, with
//!   key-wise `combine` as its merge primitive
//! - `QuadraticModel`, the value every expression evaluates to
//! - Operators `+ - *` over variables, models and constants, with checked
//!   counterparts returning `Result`
//! - `quicksum`, a single-pass bulk reduction (and a rayon-backed variant)
//! - Evaluation, variable fixing, relabelling and kind changes
//!
//! ## Canonical Form
//!
//! - `(u, v)` and `(v, u)` are one quadratic entry
//! - `x * x = x` for binary, `s * s = 1` for spin; integer and real squares
//!   are stored as self-pairs `(i, i)`
//! - Cancelled coefficients are kept as explicit zeros
//! - Products of degree three or more are rejected with `DegreeExceeded`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algebra;
pub mod evaluate;
pub mod model;
pub mod ops;
pub mod quicksum;
pub mod table;
pub mod transform;
pub mod variable;

#[cfg(test)]
mod proptests;

pub use algebra::Operand;
pub use evaluate::Sample;
pub use model::QuadraticModel;
#[cfg(feature = "parallel")]
pub use quicksum::par_quicksum;
pub use quicksum::{quicksum, QuicksumConfig};
pub use table::{LinearBiases, QuadraticBiases, TermTable, Vartypes};
pub use variable::{Binary, Integer, Real, Spin, Variable};
