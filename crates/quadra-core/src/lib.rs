//! # quadra-core
//!
//! Core vocabulary for the quadra quadratic-model algebra.
//!
//! This crate provides:
//! - Reference-counted variable labels and canonical label pairs
//! - Variable kinds (`Vartype`) with their square identities
//! - The error type shared by every algebra operation
//!
//! ## Design Principles
//!
//! - **Cheap Copies**: labels are shared strings, so models hold their own
//!   copies without aliasing a caller's variable
//! - **Canonical Keys**: `(u, v)` and `(v, u)` are the same `Pair`
//! - **No Label Allocation**: label uniqueness is the caller's responsibility

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod label;
pub mod vartype;

#[cfg(test)]
mod proptests;

pub use error::{ModelError, Result};
pub use label::{Label, Pair};
pub use vartype::{SquareRule, Vartype};

/// Numeric coefficient type used for offsets, linear and quadratic biases.
pub type Bias = f64;
