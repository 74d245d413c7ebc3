//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::sync::Once;

use quadra::prelude::*;
use quadra::model::{LinearBiases, QuadraticBiases};

/// Installs a test subscriber once; `RUST_LOG=quadra_model=trace` shows
/// accumulation events.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Builds a linear map from `(label, bias)` pairs.
pub fn linear(entries: &[(&str, Bias)]) -> LinearBiases {
    entries.iter().map(|&(l, b)| (Label::new(l), b)).collect()
}

/// Builds a quadratic map from `(u, v, bias)` triples.
pub fn quadratic(entries: &[(&str, &str, Bias)]) -> QuadraticBiases {
    entries.iter().map(|&(u, v, b)| (Pair::new(u, v), b)).collect()
}

/// Returns every permutation of `items` (Heap's algorithm).
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    fn heap<T: Clone>(k: usize, items: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
        if k <= 1 {
            out.push(items.clone());
            return;
        }
        heap(k - 1, items, out);
        for i in 0..k - 1 {
            if k % 2 == 0 {
                items.swap(i, k - 1);
            } else {
                items.swap(0, k - 1);
            }
            heap(k - 1, items, out);
        }
    }

    let mut items = items.to_vec();
    let mut out = Vec::new();
    heap(items.len(), &mut items, &mut out);
    out
}

/// Returns every ordered pair of distinct positions.
pub fn ordered_pairs<T: Clone>(items: &[T]) -> Vec<(T, T)> {
    let mut out = Vec::new();
    for (a, x) in items.iter().enumerate() {
        for (b, y) in items.iter().enumerate() {
            if a != b {
                out.push((x.clone(), y.clone()));
            }
        }
    }
    out
}
