//! Expression algebra.
//!
//! Every operator reduces to one of the functions here, which dispatch
//! explicitly on the kinds of both operands. Operands are borrowed: the
//! result is always a freshly built model.

use quadra_core::{Bias, Result};

use crate::model::QuadraticModel;
use crate::variable::Variable;

/// One side of an algebra operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand<'a> {
    /// A bare variable, promoted to `1 * variable`.
    Variable(&'a Variable),
    /// A model.
    Model(&'a QuadraticModel),
    /// A numeric constant, promoted to an offset-only model.
    Constant(Bias),
}

impl Operand<'_> {
    /// Promotes the operand to a freshly owned model.
    #[must_use]
    pub fn to_model(&self) -> QuadraticModel {
        match *self {
            Operand::Variable(v) => v.to_model(),
            Operand::Model(m) => m.clone(),
            Operand::Constant(c) => QuadraticModel::constant(c),
        }
    }
}

impl<'a> From<&'a Variable> for Operand<'a> {
    fn from(variable: &'a Variable) -> Self {
        Operand::Variable(variable)
    }
}

impl<'a> From<&'a QuadraticModel> for Operand<'a> {
    fn from(model: &'a QuadraticModel) -> Self {
        Operand::Model(model)
    }
}

impl From<Bias> for Operand<'_> {
    fn from(constant: Bias) -> Self {
        Operand::Constant(constant)
    }
}

impl From<i32> for Operand<'_> {
    fn from(constant: i32) -> Self {
        Operand::Constant(Bias::from(constant))
    }
}

/// Returns `lhs + rhs`.
///
/// # Errors
///
/// Returns `KindConflict` if the operands use one label with two kinds.
pub fn add(lhs: Operand<'_>, rhs: Operand<'_>) -> Result<QuadraticModel> {
    linear_combination(lhs, rhs, 1.0)
}

/// Returns `lhs - rhs`.
///
/// # Errors
///
/// Returns `KindConflict` if the operands use one label with two kinds.
pub fn sub(lhs: Operand<'_>, rhs: Operand<'_>) -> Result<QuadraticModel> {
    linear_combination(lhs, rhs, -1.0)
}

/// Returns `lhs + scale * rhs`.
fn linear_combination(lhs: Operand<'_>, rhs: Operand<'_>, scale: Bias) -> Result<QuadraticModel> {
    use Operand::{Constant, Model, Variable};

    match (lhs, rhs) {
        (Constant(a), Constant(b)) => Ok(QuadraticModel::constant(a + scale * b)),
        (Constant(a), Variable(v)) => {
            let mut out = v.to_model();
            out.scale(scale);
            out.add_offset(a);
            Ok(out)
        }
        (Constant(a), Model(m)) => {
            let mut out = m.scaled(scale);
            out.add_offset(a);
            Ok(out)
        }
        (Variable(v), Constant(b)) => {
            let mut out = v.to_model();
            out.add_offset(scale * b);
            Ok(out)
        }
        (Model(m), Constant(b)) => {
            let mut out = m.clone();
            out.add_offset(scale * b);
            Ok(out)
        }
        (Variable(u), Variable(v)) => {
            let mut out = u.to_model();
            out.add_linear(v, scale)?;
            Ok(out)
        }
        (Model(m), Variable(v)) => {
            let mut out = m.clone();
            out.add_linear(v, scale)?;
            Ok(out)
        }
        (Variable(u), Model(m)) => {
            let mut out = u.to_model();
            out.table.combine(&m.table, scale)?;
            Ok(out)
        }
        (Model(a), Model(b)) => {
            let mut out = a.clone();
            out.table.combine(&b.table, scale)?;
            Ok(out)
        }
    }
}

/// Returns `lhs * rhs`.
///
/// # Errors
///
/// - `DegreeExceeded` if the product has a term of degree three or more.
/// - `KindConflict` if the operands use one label with two kinds.
pub fn mul(lhs: Operand<'_>, rhs: Operand<'_>) -> Result<QuadraticModel> {
    use Operand::{Constant, Model, Variable};

    match (lhs, rhs) {
        (Constant(a), Constant(b)) => Ok(QuadraticModel::constant(a * b)),
        (Constant(c), Variable(v)) | (Variable(v), Constant(c)) => {
            let mut out = v.to_model();
            out.scale(c);
            Ok(out)
        }
        (Constant(c), Model(m)) | (Model(m), Constant(c)) => Ok(m.scaled(c)),
        (Variable(u), Variable(v)) => {
            let mut out = QuadraticModel::new();
            out.add_quadratic(u, v, 1.0)?;
            Ok(out)
        }
        (Variable(v), Model(m)) => v.to_model().table.product(&m.table).map(QuadraticModel::from),
        (Model(m), Variable(v)) => m.table.product(&v.to_model().table).map(QuadraticModel::from),
        (Model(a), Model(b)) => a.table.product(&b.table).map(QuadraticModel::from),
    }
}

/// Returns `-operand`, that is `(-1) * operand`.
#[must_use]
pub fn neg(operand: Operand<'_>) -> QuadraticModel {
    let mut out = operand.to_model();
    out.scale(-1.0);
    out
}
