//! Array reconstruction from a step log.

use std::collections::BTreeSet;

use serde::Serialize;
use sorta_algorithms::{Step, StepKind, Value};

use crate::cursor::Cursor;

/// Array contents and sorted positions at one cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub cursor: Cursor,
    pub array: Vec<Value>,
    pub sorted: BTreeSet<usize>,
    pub current_step: Option<Step>,
}

impl Frame {
    /// The untouched input, before any step.
    pub fn initial(input: &[Value]) -> Self {
        Self {
            cursor: Cursor::Start,
            array: input.to_vec(),
            sorted: BTreeSet::new(),
            current_step: None,
        }
    }

    /// Whether `index` has been marked as in its final position.
    pub fn is_sorted(&self, index: usize) -> bool {
        self.sorted.contains(&index)
    }
}

/// Apply one step to `array` and `sorted`.
///
/// An index outside the array is a generator bug. Debug builds panic;
/// release builds log it and skip the step rather than clamp.
pub fn apply_step(array: &mut [Value], sorted: &mut BTreeSet<usize>, step: &Step) {
    if !fits(step, array.len()) {
        return;
    }

    match step.kind() {
        StepKind::Swap => {
            if let &[a, b] = step.indices() {
                array.swap(a, b);
            }
        }
        StepKind::Overwrite => {
            for (index, value) in step.writes() {
                array[index] = value;
            }
        }
        StepKind::Mark => sorted.extend(step.indices().iter().copied()),
        StepKind::Compare => {}
    }
}

/// Whether every index of `step` lies inside an array of length `len`.
pub(crate) fn fits(step: &Step, len: usize) -> bool {
    let in_range = step.indices().iter().all(|&i| i < len);
    debug_assert!(in_range, "step `{}` out of range for length {}", step, len);
    if !in_range {
        tracing::error!(%step, len, "skipping out-of-range step");
    }
    in_range
}

/// Rebuild the frame at `cursor` by replaying `steps[..=cursor]` over `input`.
///
/// The cursor is clamped to the log, so any cursor is accepted. Pure: the
/// result depends only on the arguments.
pub fn reconstruct(steps: &[Step], cursor: Cursor, input: &[Value]) -> Frame {
    let cursor = cursor.clamp_to(steps.len());
    let mut frame = Frame::initial(input);

    for step in &steps[..cursor.applied()] {
        apply_step(&mut frame.array, &mut frame.sorted, step);
    }

    frame.cursor = cursor;
    frame.current_step = cursor.index().and_then(|i| steps.get(i)).cloned();
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sorta_algorithms::Algorithm;

    #[test]
    fn bubble_sort_end_to_end() {
        let input = [5, 3, 8, 1];
        let steps = Algorithm::Bubble.generate_steps(&input);
        assert_eq!(steps[0], Step::compare(0, 1));

        let end = reconstruct(&steps, Cursor::last(steps.len()), &input);
        assert_eq!(end.array, vec![1, 3, 5, 8]);
        assert_eq!(end.sorted, BTreeSet::from([0, 1, 2, 3]));
        assert_eq!(end.current_step.as_ref(), steps.last());
    }

    #[test]
    fn sorted_input_through_insertion_is_unchanged() {
        let input = [1, 2, 3];
        let steps = Algorithm::Insertion.generate_steps(&input);
        assert!(steps.iter().all(|s| !s.kind().is_mutating()));
        let end = reconstruct(&steps, Cursor::last(steps.len()), &input);
        assert_eq!(end.array, input);
    }

    #[test]
    fn empty_log_yields_input() {
        let frame = reconstruct(&[], Cursor::Start, &[4, 2]);
        assert_eq!(frame, Frame::initial(&[4, 2]));

        let frame = reconstruct(&[], Cursor::At(10), &[]);
        assert!(frame.array.is_empty());
        assert!(frame.sorted.is_empty());
        assert!(frame.current_step.is_none());
    }

    #[test]
    fn cursor_is_clamped() {
        let input = [2, 1];
        let steps = vec![Step::compare(0, 1), Step::swap(0, 1), Step::mark(1)];
        let frame = reconstruct(&steps, Cursor::At(99), &input);
        assert_eq!(frame.cursor, Cursor::At(2));
        assert_eq!(frame.array, vec![1, 2]);
        assert_eq!(frame.current_step, Some(Step::mark(1)));
    }

    #[test]
    fn compare_and_mark_leave_contents_alone() {
        let mut array = vec![3, 1, 2];
        let mut sorted = BTreeSet::new();
        apply_step(&mut array, &mut sorted, &Step::compare(0, 2));
        apply_step(&mut array, &mut sorted, &Step::mark(2));
        apply_step(&mut array, &mut sorted, &Step::mark(2));
        assert_eq!(array, vec![3, 1, 2]);
        assert_eq!(sorted, BTreeSet::from([2]));
    }

    #[test]
    fn overwrite_assigns_value() {
        let mut array = vec![3, 1, 2];
        let mut sorted = BTreeSet::new();
        apply_step(&mut array, &mut sorted, &Step::overwrite(1, 9));
        assert_eq!(array, vec![3, 9, 2]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    #[cfg(debug_assertions)]
    fn out_of_range_step_panics_in_debug() {
        let mut array = vec![1, 2];
        apply_step(&mut array, &mut BTreeSet::new(), &Step::swap(0, 5));
    }

    fn log_from(
        algorithms: Vec<Algorithm>,
    ) -> impl Strategy<Value = (Algorithm, Vec<Value>, Vec<Step>)> {
        (
            prop::sample::select(algorithms),
            prop::collection::vec(0u32..100, 0..24),
            any::<u64>(),
        )
            .prop_map(|(algorithm, input, seed)| {
                let steps =
                    algorithm.generate_steps_with(&input, &mut StdRng::seed_from_u64(seed));
                (algorithm, input, steps)
            })
    }

    fn any_log() -> impl Strategy<Value = (Algorithm, Vec<Value>, Vec<Step>)> {
        log_from(Algorithm::ALL.to_vec())
    }

    // Bogo logs run to thousands of steps; quadratic checks skip them
    fn deterministic_log() -> impl Strategy<Value = (Algorithm, Vec<Value>, Vec<Step>)> {
        log_from(
            Algorithm::ALL
                .into_iter()
                .filter(|a| !a.is_randomized())
                .collect(),
        )
    }

    proptest! {
        #[test]
        fn final_frame_is_sorted_permutation((algorithm, input, steps) in any_log()) {
            let end = reconstruct(&steps, Cursor::last(steps.len()), &input);
            let mut expected = input.clone();
            expected.sort_unstable();

            let mut values = end.array.clone();
            values.sort_unstable();
            prop_assert_eq!(&values, &expected);
            if algorithm != Algorithm::Bogo {
                prop_assert_eq!(&end.array, &expected);
            }
            prop_assert_eq!(end.sorted.len(), input.len());
        }

        #[test]
        fn consecutive_frames_differ_only_at_step((_algorithm, input, steps) in deterministic_log()) {
            let mut previous = reconstruct(&steps, Cursor::Start, &input);
            for (k, step) in steps.iter().enumerate() {
                let next = reconstruct(&steps, Cursor::At(k), &input);
                for i in 0..input.len() {
                    if previous.array[i] != next.array[i] {
                        prop_assert!(step.kind().is_mutating());
                        prop_assert!(step.indices().contains(&i));
                    }
                }
                // Marks only ever grow
                prop_assert!(previous.sorted.is_subset(&next.sorted));
                previous = next;
            }
        }

        #[test]
        fn seeking_twice_is_idempotent((_algorithm, input, steps) in any_log(), at in 0usize..400) {
            let a = reconstruct(&steps, Cursor::At(at), &input);
            let b = reconstruct(&steps, Cursor::At(at), &input);
            prop_assert_eq!(a, b);
        }
    }
}
