//! Property-based tests for the model algebra.
//!
//! Coefficients are small integers so every sum and product is exact.

#[cfg(test)]
mod tests {
    use hashbrown::HashMap;
    use proptest::prelude::*;

    use crate::algebra::Operand;
    use crate::model::QuadraticModel;
    use crate::quicksum::quicksum;
    use crate::variable::Variable;
    use quadra_core::{Bias, Label, Vartype};

    const POOL: [(&str, Vartype); 6] = [
        ("a", Vartype::Binary),
        ("b", Vartype::Binary),
        ("s", Vartype::Spin),
        ("t", Vartype::Spin),
        ("i", Vartype::Integer),
        ("j", Vartype::Integer),
    ];

    fn variable() -> impl Strategy<Value = Variable> {
        (0..POOL.len()).prop_map(|k| Variable::new(POOL[k].0, POOL[k].1))
    }

    fn coeff() -> impl Strategy<Value = Bias> {
        (-20i32..20).prop_map(Bias::from)
    }

    // Linear models over the shared pool (degree <= 1)
    fn linear_model() -> impl Strategy<Value = QuadraticModel> {
        (proptest::collection::vec((variable(), coeff()), 0..5), coeff()).prop_map(
            |(terms, offset)| {
                let mut model = QuadraticModel::constant(offset);
                for (v, c) in terms {
                    model.add_linear(&v, c).unwrap();
                }
                model
            },
        )
    }

    // Quadratic models: a product of two linear models plus a linear tail
    fn quadratic_model() -> impl Strategy<Value = QuadraticModel> {
        (linear_model(), linear_model(), linear_model())
            .prop_map(|(p, q, tail)| &p * &q + &tail)
    }

    // An assignment inside every variable's domain
    fn sample() -> impl Strategy<Value = HashMap<Label, Bias>> {
        (
            proptest::collection::vec(prop::sample::select(vec![0.0, 1.0]), 2),
            proptest::collection::vec(prop::sample::select(vec![-1.0, 1.0]), 2),
            proptest::collection::vec((-5i32..5).prop_map(Bias::from), 2),
        )
            .prop_map(|(bits, spins, ints)| {
                let values = bits.into_iter().chain(spins).chain(ints);
                POOL.iter()
                    .zip(values)
                    .map(|(&(label, _), value)| (Label::new(label), value))
                    .collect()
            })
    }

    proptest! {
        // Additive laws

        #[test]
        fn add_commutative(a in quadratic_model(), b in quadratic_model()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in quadratic_model(), b in quadratic_model(), c in quadratic_model()) {
            prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        }

        #[test]
        fn add_identity(a in quadratic_model()) {
            prop_assert_eq!(&a + 0, a.clone());
            prop_assert_eq!(0 + &a, a);
        }

        #[test]
        fn additive_inverse(a in quadratic_model()) {
            let zero = &a - &a;
            prop_assert_eq!(zero.degree(), 0);
            prop_assert_eq!(zero.offset(), 0.0);
            prop_assert_eq!(zero.num_variables(), a.num_variables());
        }

        // Multiplicative laws (linear factors keep products quadratic)

        #[test]
        fn mul_commutative(a in linear_model(), b in linear_model()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn distributive(a in linear_model(), b in linear_model(), c in linear_model()) {
            prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn mul_identity(a in quadratic_model()) {
            prop_assert_eq!(&a * 1, a.clone());
            prop_assert_eq!(1 * &a, a);
        }

        #[test]
        fn degree_is_bounded(a in quadratic_model(), b in linear_model()) {
            match a.checked_mul(&b) {
                Ok(product) => prop_assert!(product.degree() <= 2),
                Err(_) => prop_assert!(a.degree() + b.degree() > 2),
            }
        }

        // Evaluation is a ring homomorphism on each domain

        #[test]
        fn energy_add(a in quadratic_model(), b in quadratic_model(), x in sample()) {
            let sum = &a + &b;
            prop_assert_eq!(sum.energy(&x).unwrap(), a.energy(&x).unwrap() + b.energy(&x).unwrap());
        }

        #[test]
        fn energy_mul(a in linear_model(), b in linear_model(), x in sample()) {
            let product = &a * &b;
            prop_assert_eq!(product.energy(&x).unwrap(), a.energy(&x).unwrap() * b.energy(&x).unwrap());
        }

        // Quicksum

        #[test]
        fn quicksum_matches_fold(models in proptest::collection::vec(quadratic_model(), 0..6)) {
            let folded = models.iter().fold(QuadraticModel::new(), |acc, m| acc + m);
            prop_assert_eq!(quicksum(&models).unwrap(), folded);
        }

        #[test]
        fn quicksum_order_independent(
            (original, shuffled) in proptest::collection::vec((variable(), coeff()), 0..8)
                .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
        ) {
            let sum = |items: &[(Variable, Bias)]| {
                let scaled: Vec<QuadraticModel> = items.iter().map(|(v, c)| *c * v).collect();
                quicksum(scaled.iter().map(Operand::from)).unwrap()
            };
            prop_assert_eq!(sum(&original), sum(&shuffled));
        }
    }
}
