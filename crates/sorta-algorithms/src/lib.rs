//! Sorta Step Generators
//!
//! Sorting algorithms expressed as pure functions from an input snapshot to
//! an ordered log of atomic [`Step`]s.
//!
//! # Step Model
//!
//! Each log is the complete trace of one run:
//! - `Compare` - elements were read (two indices), or inspected (one index)
//! - `Swap` - two positions exchanged values
//! - `Overwrite` - values were written to positions
//! - `Mark` - a position holds its final value
//!
//! Replaying the swaps and overwrites of a log prefix onto the original
//! input reproduces the array exactly as the algorithm saw it after that
//! operation. No algorithm logic runs during replay.
//!
//! # Determinism
//!
//! Every generator works on a private copy of its input. All algorithms
//! except bogo sort are deterministic; bogo sort draws from an injected
//! [`RandomSource`] and stops after [`BOGO_MAX_SHUFFLES`] shuffles.
//!
//! ```
//! use sorta_algorithms::{Algorithm, StepKind};
//!
//! let steps = Algorithm::Bubble.generate_steps(&[5, 3, 8, 1]);
//! assert_eq!(steps[0].kind(), StepKind::Compare);
//! assert_eq!(steps[0].indices(), &[0, 1]);
//! ```

mod algorithm;
mod error;
mod random;
mod recorder;
mod step;

pub mod sorts;

pub use algorithm::{generate_steps, Algorithm, Complexity};
pub use error::{Error, Result};
pub use random::RandomSource;
pub use sorts::BOGO_MAX_SHUFFLES;
pub use step::{validate_log, Step, StepKind, Value};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn replay(input: &[Value], steps: &[Step]) -> Vec<Value> {
        sorts::testing::replay(input, steps)
    }

    #[test]
    fn empty_input_yields_empty_log_for_every_algorithm() {
        for algorithm in Algorithm::ALL {
            assert!(
                algorithm.generate_steps(&[]).is_empty(),
                "{} emitted steps for empty input",
                algorithm
            );
        }
    }

    #[test]
    fn single_element_is_trivial() {
        for algorithm in Algorithm::ALL {
            let steps = algorithm.generate_steps(&[7]);
            assert_eq!(replay(&[7], &steps), vec![7], "{}", algorithm);
            assert!(steps.iter().all(|s| s.kind() != StepKind::Swap), "{}", algorithm);
        }
    }

    #[test]
    fn logs_stay_in_bounds() {
        let input = [9, 4, 7, 1, 1, 8, 0, 3];
        for algorithm in Algorithm::ALL {
            let steps = algorithm.generate_steps(&input);
            assert_eq!(validate_log(&steps, input.len()), Ok(()), "{}", algorithm);
        }
    }

    proptest! {
        #[test]
        fn every_algorithm_sorts(input in prop::collection::vec(0u32..500, 0..40), seed in any::<u64>()) {
            let mut expected = input.clone();
            expected.sort_unstable();

            for algorithm in Algorithm::ALL {
                let mut rng = StdRng::seed_from_u64(seed);
                let steps = algorithm.generate_steps_with(&input, &mut rng);
                prop_assert!(validate_log(&steps, input.len()).is_ok());

                let end = replay(&input, &steps);
                if algorithm == Algorithm::Bogo {
                    // May give up unsorted, but only ever permutes
                    let mut permuted = end.clone();
                    permuted.sort_unstable();
                    prop_assert_eq!(permuted, expected.clone());
                } else {
                    prop_assert_eq!(&end, &expected, "{} failed", algorithm);
                }
            }
        }

        #[test]
        fn deterministic_algorithms_repeat(input in prop::collection::vec(0u32..500, 0..40)) {
            for algorithm in Algorithm::ALL.into_iter().filter(|a| !a.is_randomized()) {
                prop_assert_eq!(algorithm.generate_steps(&input), algorithm.generate_steps(&input));
            }
        }
    }
}
