//! Errors raised by the quadratic-model algebra.

use thiserror::Error;

use crate::label::Label;
use crate::vartype::Vartype;
use crate::Bias;

/// Result alias for algebra operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while building or transforming a model.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ModelError {
    /// A product would need a term of degree greater than two.
    #[error("degree exceeded: product has degree {degree}, models are at most quadratic")]
    DegreeExceeded {
        /// Degree of the requested product.
        degree: u32,
    },

    /// The same label was used with two different kinds.
    #[error("kind conflict: variable {label:?} is {existing} but was used as {requested}")]
    KindConflict {
        /// The conflicting label.
        label: Label,
        /// The kind already recorded.
        existing: Vartype,
        /// The kind of the incoming operand.
        requested: Vartype,
    },

    /// A named operation referred to a variable the model does not contain.
    #[error("unknown variable {label:?}")]
    UnknownVariable {
        /// The missing label.
        label: Label,
    },

    /// No substitution exists between the two kinds.
    #[error("cannot change variable {label:?} from {vartype} to {target}")]
    IncompatibleVartype {
        /// The variable.
        label: Label,
        /// Its current kind.
        vartype: Vartype,
        /// The requested kind.
        target: Vartype,
    },

    /// A value outside the domain of a two-valued variable.
    #[error("value {value} is not in the domain of {vartype} variable {label:?}")]
    InvalidValue {
        /// The variable.
        label: Label,
        /// The offending value.
        value: Bias,
        /// The variable's kind.
        vartype: Vartype,
    },
}
