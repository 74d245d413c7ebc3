//! Evaluation of a model on an assignment of values.

use std::collections::{BTreeMap, HashMap as StdHashMap};
use std::hash::BuildHasher;

use hashbrown::HashMap;

use quadra_core::{Bias, Label, ModelError, Result};

use crate::model::QuadraticModel;

/// An assignment of values to variable labels.
pub trait Sample {
    /// Returns the value assigned to `label`, if any.
    fn value(&self, label: &Label) -> Option<Bias>;
}

impl<S: BuildHasher> Sample for HashMap<Label, Bias, S> {
    fn value(&self, label: &Label) -> Option<Bias> {
        self.get(label).copied()
    }
}

impl<S: BuildHasher> Sample for StdHashMap<Label, Bias, S> {
    fn value(&self, label: &Label) -> Option<Bias> {
        self.get(label).copied()
    }
}

impl Sample for BTreeMap<Label, Bias> {
    fn value(&self, label: &Label) -> Option<Bias> {
        self.get(label).copied()
    }
}

impl Sample for [(Label, Bias)] {
    fn value(&self, label: &Label) -> Option<Bias> {
        self.iter().find(|(l, _)| l == label).map(|&(_, v)| v)
    }
}

impl QuadraticModel {
    /// Evaluates the polynomial on `sample`.
    ///
    /// Values are not checked against the variables' domains.
    ///
    /// # Errors
    ///
    /// Returns `UnknownVariable` if the sample has no value for a variable
    /// of the model.
    pub fn energy<S: Sample + ?Sized>(&self, sample: &S) -> Result<Bias> {
        let lookup = |label: &Label| {
            sample
                .value(label)
                .ok_or_else(|| ModelError::UnknownVariable {
                    label: label.clone(),
                })
        };

        let mut energy = self.offset();
        for (label, &bias) in self.linear() {
            energy += bias * lookup(label)?;
        }
        for (pair, &bias) in self.quadratic() {
            energy += bias * lookup(pair.first())? * lookup(pair.second())?;
        }
        Ok(energy)
    }

    /// Evaluates the polynomial on every sample.
    ///
    /// # Errors
    ///
    /// Returns the first `UnknownVariable` encountered.
    pub fn energies<'s, S, I>(&self, samples: I) -> Result<Vec<Bias>>
    where
        S: Sample + ?Sized + 's,
        I: IntoIterator<Item = &'s S>,
    {
        samples.into_iter().map(|s| self.energy(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::{Binary, Integer, Spin};

    fn sample(values: &[(&str, Bias)]) -> HashMap<Label, Bias> {
        values.iter().map(|&(l, v)| (Label::new(l), v)).collect()
    }

    #[test]
    fn test_energy() {
        let i = Integer("i");
        let j = Integer("j");
        let qm = (&i - 1) * (&j - 1);

        let e = qm.energy(&sample(&[("i", 3.0), ("j", 5.0)])).unwrap();
        assert_eq!(e, 8.0);
    }

    #[test]
    fn test_energy_self_pair() {
        let i = Integer("i");
        let qm = &i * &i + 1;
        assert_eq!(qm.energy(&sample(&[("i", 4.0)])).unwrap(), 17.0);
    }

    #[test]
    fn test_energy_missing_variable() {
        let qm = Binary("x") + Spin("s");
        let err = qm.energy(&sample(&[("x", 1.0)])).unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownVariable {
                label: Label::new("s")
            }
        );
    }

    #[test]
    fn test_energies_and_other_samples() {
        let qm = 2 * Binary("x") - 1;
        let a = sample(&[("x", 0.0)]);
        let b = sample(&[("x", 1.0)]);
        assert_eq!(qm.energies([&a, &b]).unwrap(), vec![-1.0, 1.0]);

        let pairs = [(Label::new("x"), 1.0)];
        assert_eq!(qm.energy(&pairs[..]).unwrap(), 1.0);

        let tree: BTreeMap<Label, Bias> = [(Label::new("x"), 0.0)].into_iter().collect();
        assert_eq!(qm.energy(&tree).unwrap(), -1.0);
    }
}
