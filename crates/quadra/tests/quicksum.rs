//! Bulk summation.

mod common;

use common::{init_tracing, linear, permutations, quadratic};
use quadra::prelude::*;
use quadra::QuicksumConfig;

#[test]
fn test_empty() {
    let empty: Vec<Operand<'_>> = Vec::new();
    assert_eq!(quicksum(empty).unwrap(), 0);
}

#[test]
fn test_promotion() {
    init_tracing();
    let x = Binary("x");
    let i = Integer("i");
    let s = Spin("s");
    let two_x = 2 * &x;
    let terms = [
        Operand::from(&two_x),
        Operand::from(&i),
        Operand::from(&s),
        Operand::from(1),
    ];

    for perm in permutations(&terms) {
        let qm = quicksum(perm).unwrap();

        assert_eq!(qm.linear(), &linear(&[("x", 2.0), ("i", 1.0), ("s", 1.0)]));
        assert_eq!(qm.offset(), 1.0);
        assert_eq!(qm.quadratic(), &quadratic(&[]));
    }
}

#[test]
fn test_copy() {
    let x = Binary("x").to_model();

    let newx = quicksum([&x]).unwrap();

    assert!(!std::ptr::eq(&newx, &x));
    assert!(!std::ptr::eq(newx.linear(), x.linear()));
    assert_eq!(newx, x);
}

#[test]
fn test_copy_of_variable() {
    let x = Binary("x");
    let newx = quicksum([&x]).unwrap();
    assert_eq!(newx, x.to_model());
}

#[test]
fn test_sum_trait() {
    let x = Binary("x");
    let i = Integer("i");
    let terms = [Operand::from(&x), Operand::from(&i), Operand::from(&x), Operand::from(3)];

    let qm: QuadraticModel = terms.into_iter().sum();

    assert_eq!(qm.linear(), &linear(&[("x", 2.0), ("i", 1.0)]));
    assert_eq!(qm.offset(), 3.0);
}

#[test]
fn test_kind_conflict() {
    let x = Binary("x");
    let sx = Spin("x");

    assert!(matches!(
        quicksum([&x, &sx]),
        Err(ModelError::KindConflict { .. })
    ));
}

#[cfg(feature = "parallel")]
#[test]
fn test_par_quicksum() {
    use quadra::par_quicksum;

    let vars: Vec<Variable> = (0..64).map(|k| Binary(format!("x{k}"))).collect();
    let products: Vec<QuadraticModel> = vars.windows(2).map(|w| &w[0] * &w[1]).collect();
    let terms: Vec<Operand<'_>> = vars
        .iter()
        .map(Operand::from)
        .chain(products.iter().map(Operand::from))
        .collect();

    let config = QuicksumConfig {
        parallel_threshold: 8,
        chunk_size: 10,
    };
    let parallel = par_quicksum(&terms, &config).unwrap();
    let sequential = quicksum(terms.iter().copied()).unwrap();

    assert_eq!(parallel, sequential);
    assert_eq!(parallel.num_variables(), 64);
    assert_eq!(parallel.num_interactions(), 63);
}
