//! Named model transformations: fixing, relabelling and kind changes.
//!
//! `fix_variable` and `change_vartype` work in place; `relabel` returns a new
//! model.

use hashbrown::HashMap;

use quadra_core::{Bias, Label, ModelError, Pair, Result, Vartype};

use crate::model::QuadraticModel;
use crate::table::TermTable;

impl QuadraticModel {
    /// Substitutes `value` for a variable and removes it from the model.
    ///
    /// # Errors
    ///
    /// - `UnknownVariable` if the model has no such variable.
    /// - `InvalidValue` if the variable is two-valued and `value` is not one
    ///   of its values.
    pub fn fix_variable(&mut self, label: &str, value: Bias) -> Result<()> {
        let vartype = self.vartype(label).ok_or_else(|| unknown(label))?;
        if !vartype.admits(value) {
            return Err(ModelError::InvalidValue {
                label: Label::new(label),
                value,
                vartype,
            });
        }

        let TermTable {
            vartypes,
            linear,
            quadratic,
            offset,
        } = &mut self.table;

        vartypes.remove(label);
        if let Some(bias) = linear.remove(label) {
            *offset += bias * value;
        }

        let touching: Vec<Pair> = quadratic.keys().filter(|p| p.contains(label)).cloned().collect();
        for pair in touching {
            let Some(bias) = quadratic.remove(&pair) else {
                continue;
            };
            if pair.is_self_pair() {
                *offset += bias * value * value;
            } else if let Some(other) = pair.other(label) {
                if let Some(b) = linear.get_mut(other) {
                    *b += bias * value;
                }
            }
        }
        Ok(())
    }

    /// Returns a copy with labels renamed by `mapping`.
    ///
    /// Labels absent from the mapping are kept. Two variables mapped to one
    /// label are merged; their product is canonicalized by the merged kind.
    ///
    /// # Errors
    ///
    /// Returns `KindConflict` if variables of different kinds are merged.
    pub fn relabel<K, V>(&self, mapping: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: Into<Label>,
        V: Into<Label>,
    {
        let mapping: HashMap<Label, Label> = mapping
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let rename = |label: &Label| mapping.get(label).unwrap_or(label).clone();

        let mut out = TermTable::with_capacity(self.num_variables(), self.num_interactions());
        out.offset = self.offset();
        for (label, &vartype) in self.variables() {
            out.add_variable(&rename(label), vartype)?;
        }
        for (label, &bias) in self.linear() {
            *out.linear.entry(rename(label)).or_insert(0.0) += bias;
        }
        for (pair, &bias) in self.quadratic() {
            out.add_interaction(&rename(pair.first()), &rename(pair.second()), bias);
        }
        Ok(Self::from_table(out))
    }

    /// Changes the kind of a variable by substitution, keeping the model's
    /// value on every assignment.
    ///
    /// Spin to binary uses `s = 2x - 1`; binary to spin uses
    /// `x = (s + 1) / 2`. Changing to the current kind does nothing.
    ///
    /// # Errors
    ///
    /// - `UnknownVariable` if the model has no such variable.
    /// - `IncompatibleVartype` for any other pair of kinds.
    pub fn change_vartype(&mut self, label: &str, target: Vartype) -> Result<()> {
        let current = self.vartype(label).ok_or_else(|| unknown(label))?;
        let (scale, shift) = match (current, target) {
            _ if current == target => return Ok(()),
            (Vartype::Spin, Vartype::Binary) => (2.0, -1.0),
            (Vartype::Binary, Vartype::Spin) => (0.5, 0.5),
            _ => {
                return Err(ModelError::IncompatibleVartype {
                    label: Label::new(label),
                    vartype: current,
                    target,
                })
            }
        };

        substitute_affine(&mut self.table, label, scale, shift);
        if let Some(vt) = self.table.vartypes.get_mut(label) {
            *vt = target;
        }
        Ok(())
    }
}

/// Replaces `u` by `scale * u + shift` in every term containing `u`.
///
/// Self-pairs are not handled; only two-valued kinds are substituted.
fn substitute_affine(table: &mut TermTable, label: &str, scale: Bias, shift: Bias) {
    let TermTable {
        linear,
        quadratic,
        offset,
        ..
    } = table;

    if let Some(bias) = linear.get_mut(label) {
        *offset += shift * *bias;
        *bias *= scale;
    }
    for (pair, bias) in quadratic.iter_mut() {
        let Some(other) = pair.other(label) else {
            continue;
        };
        if let Some(b) = linear.get_mut(other) {
            *b += shift * *bias;
        }
        *bias *= scale;
    }
}

fn unknown(label: &str) -> ModelError {
    ModelError::UnknownVariable {
        label: Label::new(label),
    }
}
