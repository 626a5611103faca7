//! Quick sort with Lomuto partitioning (last element as pivot).

use crate::recorder::Recorder;
use crate::step::{Step, Value};

/// Quick sort. Each pivot is marked once it lands in its final position, and
/// single-element ranges are marked as they are reached.
pub fn quick(input: &[Value]) -> Vec<Step> {
    let mut rec = Recorder::new(input);
    let n = rec.len();
    if n > 0 {
        sort_range(&mut rec, 0, n - 1);
    }
    rec.finish()
}

/// Sort the inclusive range `low..=high`.
fn sort_range(rec: &mut Recorder, low: usize, high: usize) {
    if low > high {
        return;
    }
    if low == high {
        rec.mark(low);
        return;
    }

    let pivot = partition(rec, low, high);
    rec.mark(pivot);

    if pivot > low {
        sort_range(rec, low, pivot - 1);
    }
    sort_range(rec, pivot + 1, high);
}

/// Partition around `array[high]`, returning the pivot's final index.
fn partition(rec: &mut Recorder, low: usize, high: usize) -> usize {
    // Next slot for an element smaller than the pivot
    let mut store = low;

    for j in low..high {
        if rec.compare(j, high).is_lt() {
            if store != j {
                rec.swap(store, j);
            }
            store += 1;
        }
    }

    if store != high {
        rec.swap(store, high);
    }
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::testing::{count, replay, sorted_copy};
    use crate::step::StepKind;

    #[test]
    fn quick_sorts_and_marks_each_index_once() {
        let inputs: &[&[Value]] = &[
            &[],
            &[1],
            &[5, 3, 8, 1],
            &[1, 2, 3, 4, 5, 6],
            &[6, 5, 4, 3, 2, 1],
            &[3, 3, 3, 3],
            &[10, 0, 7, 2, 9, 4, 4, 1],
        ];
        for &input in inputs {
            let steps = quick(input);
            assert_eq!(replay(input, &steps), sorted_copy(input));
            assert_eq!(count(&steps, StepKind::Mark), input.len());

            let mut marked: Vec<_> = steps
                .iter()
                .filter(|s| s.kind() == StepKind::Mark)
                .map(|s| s.indices()[0])
                .collect();
            marked.sort_unstable();
            assert_eq!(marked, (0..input.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn pivot_is_compared_against_every_element() {
        let steps = quick(&[2, 3, 1]);
        assert_eq!(&steps[..2], &[Step::compare(0, 2), Step::compare(1, 2)]);
    }

    #[test]
    fn marks_arrive_after_values_settle() {
        let input = [4, 1, 3, 2];
        let steps = quick(&input);
        for (position, step) in steps.iter().enumerate() {
            if step.kind() == StepKind::Mark {
                let index = step.indices()[0];
                let at_mark = replay(&input, &steps[..=position]);
                assert_eq!(at_mark[index], sorted_copy(&input)[index]);
            }
        }
    }
}
