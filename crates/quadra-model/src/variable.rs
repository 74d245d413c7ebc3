//! Typed variables.

use std::fmt;

use quadra_core::{Label, Vartype};

use crate::model::QuadraticModel;
use crate::table::TermTable;

/// An immutable named symbol with a fixed value domain.
///
/// Two variables are equal if and only if both label and kind match.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    label: Label,
    vartype: Vartype,
}

impl Variable {
    /// Creates a variable of the given kind.
    #[must_use]
    pub fn new(label: impl Into<Label>, vartype: Vartype) -> Self {
        Self {
            label: label.into(),
            vartype,
        }
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Returns the kind.
    #[must_use]
    pub fn vartype(&self) -> Vartype {
        self.vartype
    }

    /// Promotes the variable to the one-term model `1 * self`.
    #[must_use]
    pub fn to_model(&self) -> QuadraticModel {
        QuadraticModel::from_table(TermTable::from_variable(self))
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.vartype, self.label)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.label, f)
    }
}

/// Creates a binary ({0, 1}) variable.
#[allow(non_snake_case)]
#[must_use]
pub fn Binary(label: impl Into<Label>) -> Variable {
    Variable::new(label, Vartype::Binary)
}

/// Creates a spin ({-1, +1}) variable.
#[allow(non_snake_case)]
#[must_use]
pub fn Spin(label: impl Into<Label>) -> Variable {
    Variable::new(label, Vartype::Spin)
}

/// Creates an integer variable.
#[allow(non_snake_case)]
#[must_use]
pub fn Integer(label: impl Into<Label>) -> Variable {
    Variable::new(label, Vartype::Integer)
}

/// Creates a real-valued variable.
#[allow(non_snake_case)]
#[must_use]
pub fn Real(label: impl Into<Label>) -> Variable {
    Variable::new(label, Vartype::Real)
}
