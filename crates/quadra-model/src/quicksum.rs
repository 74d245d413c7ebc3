//! Bulk summation.
//!
//! `quicksum` folds a sequence of variables, models and constants into one
//! freshly owned model in a single pass, using the same `combine` primitive
//! as `+`. The result never shares storage with an input.

use std::iter::Sum;

use tracing::trace;

use quadra_core::Result;

use crate::algebra::Operand;
use crate::model::QuadraticModel;
use crate::table::TermTable;
use crate::variable::Variable;

/// Sums `terms` into a new model.
///
/// Equal to left-to-right addition of the terms; an empty sequence gives
/// the zero model.
///
/// # Errors
///
/// Returns `KindConflict` if two terms use one label with two kinds.
///
/// # Example
///
/// ```
/// use quadra_model::{quicksum, Binary, Integer, Operand};
///
/// let x = Binary("x");
/// let i = Integer("i");
/// let qm = quicksum([Operand::from(&x), Operand::from(&i), Operand::from(1)]).unwrap();
///
/// assert_eq!(qm.get_linear("x"), Some(1.0));
/// assert_eq!(qm.offset(), 1.0);
/// ```
pub fn quicksum<'a, I>(terms: I) -> Result<QuadraticModel>
where
    I: IntoIterator,
    I::Item: Into<Operand<'a>>,
{
    let terms = terms.into_iter();
    let mut acc = QuadraticModel::from_table(TermTable::with_capacity(terms.size_hint().0, 0));

    let mut count = 0usize;
    for term in terms {
        acc.accumulate(term, 1.0)?;
        count += 1;
    }

    trace!(terms = count, variables = acc.num_variables(), "quicksum");
    Ok(acc)
}

/// Configuration for `par_quicksum`.
#[derive(Clone, Debug)]
pub struct QuicksumConfig {
    /// Minimum number of terms to enable parallelism.
    pub parallel_threshold: usize,
    /// Number of terms summed by one task.
    pub chunk_size: usize,
}

impl Default for QuicksumConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 4096,
            chunk_size: 1024,
        }
    }
}

/// Sums `terms` into a new model using rayon.
///
/// Each chunk of `chunk_size` terms is summed into a task-local model; the
/// partial models are then merged pairwise with `combine`. Below
/// `parallel_threshold` this is `quicksum`.
///
/// # Errors
///
/// Returns `KindConflict` if two terms use one label with two kinds.
#[cfg(feature = "parallel")]
pub fn par_quicksum(terms: &[Operand<'_>], config: &QuicksumConfig) -> Result<QuadraticModel> {
    use rayon::prelude::*;

    if terms.len() < config.parallel_threshold {
        return quicksum(terms.iter().copied());
    }

    let chunk_size = config.chunk_size.max(1);
    trace!(terms = terms.len(), chunk_size, "parallel quicksum");

    terms
        .par_chunks(chunk_size)
        .map(|chunk| quicksum(chunk.iter().copied()))
        .try_reduce(QuadraticModel::new, |mut acc, mut part| {
            if part.num_variables() > acc.num_variables() {
                std::mem::swap(&mut acc, &mut part);
            }
            acc.table.combine(&part.table, 1.0)?;
            Ok(acc)
        })
}

impl<'a> Sum<Operand<'a>> for QuadraticModel {
    #[track_caller]
    fn sum<I: Iterator<Item = Operand<'a>>>(iter: I) -> Self {
        quicksum(iter).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<'a> Sum<&'a QuadraticModel> for QuadraticModel {
    #[track_caller]
    fn sum<I: Iterator<Item = &'a QuadraticModel>>(iter: I) -> Self {
        quicksum(iter).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<'a> Sum<&'a Variable> for QuadraticModel {
    #[track_caller]
    fn sum<I: Iterator<Item = &'a Variable>>(iter: I) -> Self {
        quicksum(iter).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Sum for QuadraticModel {
    #[track_caller]
    fn sum<I: Iterator<Item = QuadraticModel>>(iter: I) -> Self {
        iter.fold(QuadraticModel::new(), |acc, model| acc + model)
    }
}

impl Sum<Variable> for QuadraticModel {
    #[track_caller]
    fn sum<I: Iterator<Item = Variable>>(iter: I) -> Self {
        iter.fold(QuadraticModel::new(), |acc, variable| acc + variable)
    }
}
