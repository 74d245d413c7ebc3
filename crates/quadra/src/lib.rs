//! # Quadra
//!
//! Symbolic algebra for canonical quadratic models.
//!
//! Expressions over typed variables fold into a single model with an
//! offset, linear biases and quadratic biases over unordered variable pairs.
//!
//! ## Features
//!
//! - **Typed Variables**: binary, spin, integer and real kinds
//! - **Operator Algebra**: `+ - *` between variables, models and constants,
//!   in either order, with checked variants
//! - **Canonical Terms**: repeated variables and pairs merge by summation
//! - **Quicksum**: single-pass bulk summation, optionally parallel
//!
//! ## Quick Start
//!
//! ```rust
//! use quadra::prelude::*;
//!
//! let i = Integer("i");
//! let j = Integer("j");
//!
//! let qm = (&i - 1) * (&j - 1);
//!
//! assert_eq!(qm.get_linear("i"), Some(-1.0));
//! assert_eq!(qm.get_quadratic("i", "j"), Some(1.0));
//! assert_eq!(qm.offset(), 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quadra_core as core;
pub use quadra_model as model;

pub use quadra_core::{Bias, Label, ModelError, Pair, Result, Vartype};
#[cfg(feature = "parallel")]
pub use quadra_model::par_quicksum;
pub use quadra_model::{
    quicksum, Binary, Integer, Operand, QuadraticModel, QuicksumConfig, Real, Spin, Variable,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quadra_core::{Bias, Label, ModelError, Pair, Vartype};
    pub use quadra_model::{
        quicksum, Binary, Integer, Operand, QuadraticModel, Real, Sample, Spin, Variable,
    };
}
