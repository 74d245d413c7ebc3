//! Property-based tests for labels and pairs.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::label::Pair;
    use crate::vartype::Vartype;

    fn label_text() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{0,3}"
    }

    fn vartype() -> impl Strategy<Value = Vartype> {
        prop_oneof![
            Just(Vartype::Binary),
            Just(Vartype::Spin),
            Just(Vartype::Integer),
            Just(Vartype::Real),
        ]
    }

    proptest! {
        #[test]
        fn pair_is_unordered(a in label_text(), b in label_text()) {
            prop_assert_eq!(Pair::new(a.as_str(), b.as_str()), Pair::new(b.as_str(), a.as_str()));
        }

        #[test]
        fn pair_is_sorted(a in label_text(), b in label_text()) {
            let p = Pair::new(a.as_str(), b.as_str());
            prop_assert!(p.first() <= p.second());
            prop_assert_eq!(p.is_self_pair(), a == b);
        }

        #[test]
        fn pair_other_round_trips(a in label_text(), b in label_text()) {
            let p = Pair::new(a.as_str(), b.as_str());
            prop_assert_eq!(p.other(&a).map(|l| l.as_str().to_string()), Some(b.clone()));
            prop_assert_eq!(p.other(&b).map(|l| l.as_str().to_string()), Some(a));
        }

        #[test]
        fn two_valued_domains_admit_their_values(vt in vartype()) {
            if let Some(values) = vt.values() {
                for v in values {
                    prop_assert!(vt.admits(v));
                }
            }
        }
    }
}
