//! Term tables.
//!
//! A `TermTable` is the canonical storage of a quadratic model: an offset,
//! a linear map and a quadratic map over unordered label pairs, plus the
//! kind of every variable. Its only combining primitive is key-wise
//! addition (`combine`); products are built from the same insertion
//! helpers so repeated terms always merge by summation.

use hashbrown::HashMap;
use tracing::debug;

use quadra_core::{Bias, Label, ModelError, Pair, Result, SquareRule, Vartype};

use crate::variable::Variable;

/// Linear biases keyed by variable label.
pub type LinearBiases = HashMap<Label, Bias>;

/// Quadratic biases keyed by canonical label pair.
pub type QuadraticBiases = HashMap<Pair, Bias>;

/// Variable kinds keyed by variable label.
pub type Vartypes = HashMap<Label, Vartype>;

/// Canonical storage for an offset + linear + quadratic polynomial.
///
/// Invariants:
/// - `vartypes` and `linear` have the same key set;
/// - every label of a quadratic key is in `linear`;
/// - a self-pair `(u, u)` only exists when `u`'s kind keeps self-pairs.
///
/// Terms whose coefficient cancels to zero are kept.
#[derive(Clone, Debug, Default)]
pub struct TermTable {
    pub(crate) vartypes: Vartypes,
    pub(crate) linear: LinearBiases,
    pub(crate) quadratic: QuadraticBiases,
    pub(crate) offset: Bias,
}

impl TermTable {
    /// Creates an empty table (the zero polynomial).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(num_variables: usize, num_interactions: usize) -> Self {
        Self {
            vartypes: HashMap::with_capacity(num_variables),
            linear: HashMap::with_capacity(num_variables),
            quadratic: HashMap::with_capacity(num_interactions),
            offset: 0.0,
        }
    }

    /// Creates a constant table.
    #[must_use]
    pub fn constant(offset: Bias) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    /// Creates the table of a single variable: `linear = {label: 1}`.
    #[must_use]
    pub fn from_variable(variable: &Variable) -> Self {
        let mut table = Self::with_capacity(1, 0);
        table
            .vartypes
            .insert(variable.label().clone(), variable.vartype());
        table.linear.insert(variable.label().clone(), 1.0);
        table
    }

    /// Returns the constant term.
    #[must_use]
    pub fn offset(&self) -> Bias {
        self.offset
    }

    /// Returns the linear biases.
    #[must_use]
    pub fn linear(&self) -> &LinearBiases {
        &self.linear
    }

    /// Returns the quadratic biases.
    #[must_use]
    pub fn quadratic(&self) -> &QuadraticBiases {
        &self.quadratic
    }

    /// Returns the kind of every variable.
    #[must_use]
    pub fn vartypes(&self) -> &Vartypes {
        &self.vartypes
    }

    /// Returns the kind of a variable, if present.
    #[must_use]
    pub fn vartype(&self, label: &str) -> Option<Vartype> {
        self.vartypes.get(label).copied()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_variables(&self) -> usize {
        self.linear.len()
    }

    /// Returns the number of quadratic entries.
    #[must_use]
    pub fn num_interactions(&self) -> usize {
        self.quadratic.len()
    }

    /// Returns the polynomial degree, counting only non-zero coefficients.
    #[must_use]
    pub fn degree(&self) -> u32 {
        if self.quadratic.values().any(|&b| b != 0.0) {
            2
        } else if self.linear.values().any(|&b| b != 0.0) {
            1
        } else {
            0
        }
    }

    /// Adds `bias` to the offset.
    pub fn add_offset(&mut self, bias: Bias) {
        self.offset += bias;
    }

    /// Records a variable with a zero linear bias if it is absent.
    ///
    /// # Errors
    ///
    /// Returns `KindConflict` if the label is present with another kind.
    pub fn add_variable(&mut self, label: &Label, vartype: Vartype) -> Result<()> {
        match self.vartypes.get(label) {
            Some(&existing) if existing != vartype => Err(kind_conflict(label, existing, vartype)),
            Some(_) => Ok(()),
            None => {
                self.vartypes.insert(label.clone(), vartype);
                self.linear.insert(label.clone(), 0.0);
                Ok(())
            }
        }
    }

    /// Adds `bias` to the linear term of `variable`.
    ///
    /// # Errors
    ///
    /// Returns `KindConflict` if the label is present with another kind.
    pub fn add_linear(&mut self, variable: &Variable, bias: Bias) -> Result<()> {
        self.add_variable(variable.label(), variable.vartype())?;
        *self.linear.entry_ref(variable.label().as_str()).or_insert(0.0) += bias;
        Ok(())
    }

    /// Adds `bias * u * v`, canonicalizing a self-product by `u`'s kind.
    ///
    /// # Errors
    ///
    /// Returns `KindConflict` if either label is present with another kind,
    /// or if `u` and `v` share a label but not a kind.
    pub fn add_quadratic(&mut self, u: &Variable, v: &Variable, bias: Bias) -> Result<()> {
        if u.label() == v.label() && u.vartype() != v.vartype() {
            return Err(kind_conflict(u.label(), u.vartype(), v.vartype()));
        }
        self.add_variable(u.label(), u.vartype())?;
        self.add_variable(v.label(), v.vartype())?;
        self.add_interaction(u.label(), v.label(), bias);
        Ok(())
    }

    /// Adds `bias * u * v` for two labels already in the table.
    pub(crate) fn add_interaction(&mut self, u: &Label, v: &Label, bias: Bias) {
        if u != v {
            *self.quadratic.entry(Pair::new(u, v)).or_insert(0.0) += bias;
            return;
        }
        let rule = self
            .vartypes
            .get(u)
            .map_or(SquareRule::SelfPair, |vt| vt.square_rule());
        match rule {
            SquareRule::Linear => *self.linear.entry(u.clone()).or_insert(0.0) += bias,
            SquareRule::Constant => self.offset += bias,
            SquareRule::SelfPair => {
                *self.quadratic.entry(Pair::new(u, u)).or_insert(0.0) += bias;
            }
        }
    }

    /// Multiplies every coefficient, including the offset, by `factor`.
    pub fn scale(&mut self, factor: Bias) {
        self.offset *= factor;
        self.linear.values_mut().for_each(|b| *b *= factor);
        self.quadratic.values_mut().for_each(|b| *b *= factor);
    }

    /// Checks that every label of `other` has the same kind here.
    fn check_compatible(&self, other: &TermTable) -> Result<()> {
        for (label, &requested) in &other.vartypes {
            if let Some(&existing) = self.vartypes.get(label) {
                if existing != requested {
                    return Err(kind_conflict(label, existing, requested));
                }
            }
        }
        Ok(())
    }

    /// Adds `scale * coefficient` for every entry of `src`, inserting keys
    /// that are absent.
    ///
    /// The table is left untouched when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns `KindConflict` if a label of `src` is recorded here with
    /// another kind.
    pub fn combine(&mut self, src: &TermTable, scale: Bias) -> Result<()> {
        self.check_compatible(src)?;

        self.vartypes.reserve(src.vartypes.len());
        self.linear.reserve(src.linear.len());
        self.quadratic.reserve(src.quadratic.len());

        for (label, &vartype) in &src.vartypes {
            self.vartypes.entry_ref(label).or_insert(vartype);
        }
        for (label, &bias) in &src.linear {
            *self.linear.entry_ref(label).or_insert(0.0) += scale * bias;
        }
        for (pair, &bias) in &src.quadratic {
            *self.quadratic.entry_ref(pair).or_insert(0.0) += scale * bias;
        }
        self.offset += scale * src.offset;
        Ok(())
    }

    /// Adds the linear and quadratic entries of `src` times `scale`.
    fn add_scaled_terms(&mut self, src: &TermTable, scale: Bias) {
        for (label, &bias) in &src.linear {
            *self.linear.entry_ref(label).or_insert(0.0) += scale * bias;
        }
        for (pair, &bias) in &src.quadratic {
            *self.quadratic.entry_ref(pair).or_insert(0.0) += scale * bias;
        }
    }

    /// Multiplies two tables by distributing over offset, linear and
    /// quadratic parts.
    ///
    /// The degree check sees only non-zero coefficients, so a cancelled
    /// quadratic factor is accepted. Its zero-valued linear terms still
    /// distribute, and the product gains zero-valued pairs absent from both
    /// factors.
    ///
    /// # Errors
    ///
    /// - `KindConflict` if the tables disagree on a label's kind.
    /// - `DegreeExceeded` if the product has degree greater than two.
    pub fn product(&self, other: &TermTable) -> Result<TermTable> {
        self.check_compatible(other)?;

        let degree = self.degree() + other.degree();
        if degree > 2 {
            debug!(degree, "product exceeds quadratic degree");
            return Err(ModelError::DegreeExceeded { degree });
        }

        let mut out = TermTable::with_capacity(
            self.num_variables() + other.num_variables(),
            self.num_interactions() + other.num_interactions() + self.linear.len() * other.linear.len(),
        );
        for (label, &vartype) in self.vartypes.iter().chain(&other.vartypes) {
            if !out.vartypes.contains_key(label) {
                out.vartypes.insert(label.clone(), vartype);
                out.linear.insert(label.clone(), 0.0);
            }
        }

        out.offset = self.offset * other.offset;
        out.add_scaled_terms(self, other.offset);
        out.add_scaled_terms(other, self.offset);

        for (u, &c) in &self.linear {
            for (v, &d) in &other.linear {
                out.add_interaction(u, v, c * d);
            }
        }

        Ok(out)
    }

    /// Returns true if both tables have the same variable kinds, the same
    /// keys and every coefficient differs by at most `tolerance`.
    #[must_use]
    pub fn is_almost_equal(&self, other: &TermTable, tolerance: Bias) -> bool {
        let close = |a: Bias, b: Bias| (a - b).abs() <= tolerance;

        close(self.offset, other.offset)
            && self.vartypes == other.vartypes
            && self.linear.len() == other.linear.len()
            && self.quadratic.len() == other.quadratic.len()
            && self
                .linear
                .iter()
                .all(|(k, &a)| other.linear.get(k).is_some_and(|&b| close(a, b)))
            && self
                .quadratic
                .iter()
                .all(|(k, &a)| other.quadratic.get(k).is_some_and(|&b| close(a, b)))
    }
}

impl PartialEq for TermTable {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
            && self.vartypes == other.vartypes
            && self.linear == other.linear
            && self.quadratic == other.quadratic
    }
}

fn kind_conflict(label: &Label, existing: Vartype, requested: Vartype) -> ModelError {
    debug!(%label, %existing, %requested, "kind conflict");
    ModelError::KindConflict {
        label: label.clone(),
        existing,
        requested,
    }
}
