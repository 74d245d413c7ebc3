//! Quadratic models.
//!
//! `QuadraticModel` is the value every expression evaluates to. It owns a
//! `TermTable`; operations on borrowed models always build a new table.

use std::fmt;

use quadra_core::{Bias, Label, Pair, Result, Vartype};

use crate::algebra::{self, Operand};
use crate::table::{LinearBiases, QuadraticBiases, TermTable, Vartypes};
use crate::variable::Variable;

/// A polynomial of degree at most two over typed variables.
///
/// Two models are equal when their offsets, variable kinds, linear maps and
/// quadratic maps are equal key-for-key. Cancelled coefficients are kept as explicit zeros,
/// so `x - x` still contains `x`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuadraticModel {
    pub(crate) table: TermTable,
}

impl QuadraticModel {
    /// Creates the zero model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model with no variables and the given offset.
    #[must_use]
    pub fn constant(offset: Bias) -> Self {
        Self {
            table: TermTable::constant(offset),
        }
    }

    /// Wraps an existing table.
    #[must_use]
    pub fn from_table(table: TermTable) -> Self {
        Self { table }
    }

    /// Returns the underlying table.
    #[must_use]
    pub fn table(&self) -> &TermTable {
        &self.table
    }

    /// Consumes the model, returning its table.
    #[must_use]
    pub fn into_table(self) -> TermTable {
        self.table
    }

    /// Returns the constant term.
    #[must_use]
    pub fn offset(&self) -> Bias {
        self.table.offset()
    }

    /// Returns the linear biases.
    #[must_use]
    pub fn linear(&self) -> &LinearBiases {
        self.table.linear()
    }

    /// Returns the quadratic biases.
    #[must_use]
    pub fn quadratic(&self) -> &QuadraticBiases {
        self.table.quadratic()
    }

    /// Returns every variable with its kind.
    #[must_use]
    pub fn variables(&self) -> &Vartypes {
        self.table.vartypes()
    }

    /// Returns the kind of a variable, if present.
    #[must_use]
    pub fn vartype(&self, label: &str) -> Option<Vartype> {
        self.table.vartype(label)
    }

    /// Returns true if the model contains the variable.
    #[must_use]
    pub fn has_variable(&self, label: &str) -> bool {
        self.table.linear().contains_key(label)
    }

    /// Returns the linear bias of a variable.
    #[must_use]
    pub fn get_linear(&self, label: &str) -> Option<Bias> {
        self.table.linear().get(label).copied()
    }

    /// Returns the quadratic bias of the pair `(u, v)`.
    #[must_use]
    pub fn get_quadratic(&self, u: &str, v: &str) -> Option<Bias> {
        self.table.quadratic().get(&Pair::new(u, v)).copied()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_variables(&self) -> usize {
        self.table.num_variables()
    }

    /// Returns the number of quadratic entries.
    #[must_use]
    pub fn num_interactions(&self) -> usize {
        self.table.num_interactions()
    }

    /// Returns the degree, counting only non-zero coefficients.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.table.degree()
    }

    /// Returns true if no quadratic coefficient is non-zero.
    #[must_use]
    pub fn is_linear(&self) -> bool {
        self.degree() < 2
    }

    /// Returns true if coefficients agree within `tolerance`.
    #[must_use]
    pub fn is_almost_equal(&self, other: &QuadraticModel, tolerance: Bias) -> bool {
        self.table.is_almost_equal(&other.table, tolerance)
    }

    // === In-place construction ===

    /// Adds a variable with a zero linear bias if absent.
    ///
    /// # Errors
    ///
    /// Returns `KindConflict` if the label is present with another kind.
    pub fn add_variable(&mut self, label: impl Into<Label>, vartype: Vartype) -> Result<()> {
        self.table.add_variable(&label.into(), vartype)
    }

    /// Adds `bias` to the linear term of `variable`.
    ///
    /// # Errors
    ///
    /// Returns `KindConflict` if the label is present with another kind.
    pub fn add_linear(&mut self, variable: &Variable, bias: Bias) -> Result<()> {
        self.table.add_linear(variable, bias)
    }

    /// Adds `bias * u * v`.
    ///
    /// # Errors
    ///
    /// Returns `KindConflict` if a label is present with another kind.
    pub fn add_quadratic(&mut self, u: &Variable, v: &Variable, bias: Bias) -> Result<()> {
        self.table.add_quadratic(u, v, bias)
    }

    /// Adds `bias` to the offset.
    pub fn add_offset(&mut self, bias: Bias) {
        self.table.add_offset(bias);
    }

    /// Multiplies every coefficient by `factor` in place.
    pub fn scale(&mut self, factor: Bias) {
        self.table.scale(factor);
    }

    /// Returns a scaled copy.
    #[must_use]
    pub fn scaled(&self, factor: Bias) -> Self {
        let mut out = self.clone();
        out.scale(factor);
        out
    }

    /// Adds `scale * operand` to this model in place.
    ///
    /// This is the mutating counterpart of `+` and `-`; the model is left
    /// unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns `KindConflict` if the operand uses a label with another kind.
    pub fn accumulate<'a>(&mut self, operand: impl Into<Operand<'a>>, scale: Bias) -> Result<()> {
        match operand.into() {
            Operand::Constant(c) => {
                self.table.add_offset(scale * c);
                Ok(())
            }
            Operand::Variable(v) => self.table.add_linear(v, scale),
            Operand::Model(m) => self.table.combine(&m.table, scale),
        }
    }

    // === Checked algebra ===

    /// Returns `self + rhs`.
    ///
    /// # Errors
    ///
    /// Returns `KindConflict` on a label used with two kinds.
    pub fn checked_add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self> {
        algebra::add(Operand::Model(self), rhs.into())
    }

    /// Returns `self - rhs`.
    ///
    /// # Errors
    ///
    /// Returns `KindConflict` on a label used with two kinds.
    pub fn checked_sub<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self> {
        algebra::sub(Operand::Model(self), rhs.into())
    }

    /// Returns `self * rhs`.
    ///
    /// # Errors
    ///
    /// Returns `DegreeExceeded` if the product is not quadratic, or
    /// `KindConflict` on a label used with two kinds.
    pub fn checked_mul<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self> {
        algebra::mul(Operand::Model(self), rhs.into())
    }
}

impl From<TermTable> for QuadraticModel {
    fn from(table: TermTable) -> Self {
        Self::from_table(table)
    }
}

impl From<Variable> for QuadraticModel {
    fn from(variable: Variable) -> Self {
        variable.to_model()
    }
}

impl From<&Variable> for QuadraticModel {
    fn from(variable: &Variable) -> Self {
        variable.to_model()
    }
}

impl From<Bias> for QuadraticModel {
    fn from(offset: Bias) -> Self {
        Self::constant(offset)
    }
}

impl From<i32> for QuadraticModel {
    fn from(offset: i32) -> Self {
        Self::constant(Bias::from(offset))
    }
}

impl PartialEq<Bias> for QuadraticModel {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Bias) -> bool {
        self.table.linear().is_empty() && self.table.quadratic().is_empty() && self.offset() == *other
    }
}

impl PartialEq<i32> for QuadraticModel {
    fn eq(&self, other: &i32) -> bool {
        *self == Bias::from(*other)
    }
}

impl PartialEq<QuadraticModel> for Bias {
    fn eq(&self, other: &QuadraticModel) -> bool {
        other == self
    }
}

impl PartialEq<QuadraticModel> for i32 {
    fn eq(&self, other: &QuadraticModel) -> bool {
        other == self
    }
}

impl fmt::Display for QuadraticModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut linear: Vec<_> = self.linear().iter().collect();
        linear.sort_by(|a, b| a.0.cmp(b.0));
        let mut quadratic: Vec<_> = self.quadratic().iter().collect();
        quadratic.sort_by(|a, b| a.0.cmp(b.0));

        let mut terms = Vec::with_capacity(1 + linear.len() + quadratic.len());
        if self.offset() != 0.0 || (linear.is_empty() && quadratic.is_empty()) {
            terms.push(format!("{}", self.offset()));
        }
        terms.extend(linear.into_iter().map(|(u, c)| format!("{c}*{u}")));
        terms.extend(quadratic.into_iter().map(|(p, c)| format!("{c}*{p}")));

        write!(f, "{}", terms.join(" + "))
    }
}
