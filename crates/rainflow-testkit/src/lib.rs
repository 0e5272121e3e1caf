//! Property-test strategies shared by the rainflow crates.
//!
//! `rainflow-core`'s proptest suite and any downstream crate build sample
//! streams from [`class_params_and_samples`] rather than hand-rolling
//! their own `Strategy` composition.

use proptest::prelude::*;
use rainflow_common::ClassParameters;

/// Class parameters drawn from a sane, bounded range: enough classes and
/// width to be interesting, never degenerate.
pub fn class_params() -> impl Strategy<Value = ClassParameters> {
    (2u32..=32, 0.1f64..10.0, -50.0f64..50.0).prop_flat_map(|(class_count, width, offset)| {
        let span = class_count as f64 * width;
        (0.0f64..span).prop_map(move |hysteresis| {
            ClassParameters::new(class_count, width, offset, hysteresis)
                .expect("generated parameters satisfy ClassParameters::new's invariants")
        })
    })
}

/// A class-parameters instance paired with a sample stream drawn from
/// its valid range (`[lower_bound, upper_bound)`).
pub fn class_params_and_samples(
    max_len: usize,
) -> impl Strategy<Value = (ClassParameters, Vec<f64>)> {
    class_params().prop_flat_map(move |cp| {
        let lower = cp.lower_bound();
        let upper = cp.upper_bound();
        prop::collection::vec(lower..upper, 0..max_len).prop_map(move |samples| (cp, samples))
    })
}

/// Split `samples` into an arbitrary number of contiguous, non-empty
/// chunks — used to verify that feeding a stream in pieces produces the
/// same result as feeding it whole.
pub fn arbitrary_chunking(samples: &[f64]) -> impl Strategy<Value = Vec<Vec<f64>>> {
    let len = samples.len();
    let owned = samples.to_vec();
    if len == 0 {
        return Just(vec![]).boxed();
    }
    prop::collection::vec(1usize..=len.max(1), 1..=len)
        .prop_map(move |cut_sizes| {
            let mut chunks = Vec::new();
            let mut rest = owned.as_slice();
            for size in cut_sizes {
                if rest.is_empty() {
                    break;
                }
                let take = size.min(rest.len());
                let (chunk, remainder) = rest.split_at(take);
                chunks.push(chunk.to_vec());
                rest = remainder;
            }
            if !rest.is_empty() {
                chunks.push(rest.to_vec());
            }
            chunks
        })
        .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn class_params_strategy_always_constructs(cp in class_params()) {
            prop_assert!(cp.class_count() >= 2);
            prop_assert!(cp.upper_bound() > cp.lower_bound());
        }

        #[test]
        fn samples_strategy_stays_in_range((cp, samples) in class_params_and_samples(50)) {
            for s in &samples {
                prop_assert!(*s >= cp.lower_bound() && *s < cp.upper_bound());
            }
        }

        #[test]
        fn chunking_reconstructs_the_original_sequence((_cp, samples) in class_params_and_samples(50)) {
            let mut runner = proptest::test_runner::TestRunner::default();
            let tree = arbitrary_chunking(&samples).new_tree(&mut runner).unwrap();
            let reconstructed: Vec<f64> = tree.current().into_iter().flatten().collect();
            prop_assert_eq!(reconstructed, samples);
            prop_assert!(tree.current().iter().all(|chunk| !chunk.is_empty()));
        }
    }
}
