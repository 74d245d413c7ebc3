//! Variable kinds.
//!
//! A `Vartype` fixes the value domain of a variable and, with it, how the
//! variable's square is canonicalized when two linear terms on the same
//! variable are multiplied.

use std::fmt;

use crate::Bias;

/// The value domain of a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vartype {
    /// Two-valued, {0, 1}.
    Binary,
    /// Two-valued, {-1, +1}.
    Spin,
    /// Unbounded integer. Bounds are not enforced here.
    Integer,
    /// Real-valued.
    Real,
}

/// How `u * u` is stored for a variable `u`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SquareRule {
    /// `u * u = u`: the product folds into the linear term of `u`.
    Linear,
    /// `u * u = 1`: the product folds into the offset.
    Constant,
    /// No identity: the product is kept as the quadratic self-pair `(u, u)`.
    SelfPair,
}

impl Vartype {
    /// Returns the canonicalization of a self-product for this kind.
    #[must_use]
    pub const fn square_rule(self) -> SquareRule {
        match self {
            Vartype::Binary => SquareRule::Linear,
            Vartype::Spin => SquareRule::Constant,
            Vartype::Integer | Vartype::Real => SquareRule::SelfPair,
        }
    }

    /// Returns the two admissible values of a two-valued kind.
    #[must_use]
    pub const fn values(self) -> Option<[Bias; 2]> {
        match self {
            Vartype::Binary => Some([0.0, 1.0]),
            Vartype::Spin => Some([-1.0, 1.0]),
            Vartype::Integer | Vartype::Real => None,
        }
    }

    /// Returns true if the kind has exactly two values.
    #[must_use]
    pub const fn is_two_valued(self) -> bool {
        self.values().is_some()
    }

    /// Returns true if `value` is in the domain of a two-valued kind.
    ///
    /// Integer and real domains are not checked and always admit the value.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn admits(self, value: Bias) -> bool {
        match self.values() {
            Some([lo, hi]) => value == lo || value == hi,
            None => true,
        }
    }
}

impl fmt::Display for Vartype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Vartype::Binary => "BINARY",
            Vartype::Spin => "SPIN",
            Vartype::Integer => "INTEGER",
            Vartype::Real => "REAL",
        };
        f.write_str(name)
    }
}
