//! Selection-based sorts: selection sort and heap sort.

use crate::recorder::Recorder;
use crate::step::{Step, Value};

/// Selection sort. Positions are marked from the start outward.
pub fn selection(input: &[Value]) -> Vec<Step> {
    let mut rec = Recorder::new(input);
    let n = rec.len();

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if rec.compare(min, j).is_gt() {
                min = j;
            }
        }
        if min != i {
            rec.swap(i, min);
        }
        rec.mark(i);
    }

    if n > 0 {
        rec.mark(n - 1);
    }
    rec.finish()
}

/// Heap sort over a binary max-heap. The tail is marked as each maximum is
/// extracted.
pub fn heap(input: &[Value]) -> Vec<Step> {
    let mut rec = Recorder::new(input);
    let n = rec.len();

    for root in (0..n / 2).rev() {
        sift_down(&mut rec, n, root);
    }

    for end in (1..n).rev() {
        rec.swap(0, end);
        rec.mark(end);
        sift_down(&mut rec, end, 0);
    }

    if n > 0 {
        rec.mark(0);
    }
    rec.finish()
}

/// Restore the heap property for the subtree at `root`, considering only
/// the first `size` elements.
fn sift_down(rec: &mut Recorder, size: usize, mut root: usize) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;

        if left < size && rec.compare(left, largest).is_gt() {
            largest = left;
        }
        if right < size && rec.compare(right, largest).is_gt() {
            largest = right;
        }
        if largest == root {
            return;
        }

        rec.swap(root, largest);
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::testing::{marked, replay, sorted_copy};
    use crate::step::StepKind;

    #[test]
    fn selection_marks_from_start() {
        let steps = selection(&[3, 1, 2]);
        let marks: Vec<_> = steps
            .iter()
            .filter(|s| s.kind() == StepKind::Mark)
            .map(|s| s.indices()[0])
            .collect();
        assert_eq!(marks, vec![0, 1, 2]);
        assert_eq!(steps[0], Step::compare(0, 1));
    }

    #[test]
    fn selection_skips_self_swap() {
        let steps = selection(&[1, 2, 3]);
        assert!(steps.iter().all(|s| s.kind() != StepKind::Swap));
    }

    #[test]
    fn heap_marks_tail_first() {
        let steps = heap(&[2, 9, 4]);
        let first_mark = steps.iter().find(|s| s.kind() == StepKind::Mark).unwrap();
        assert_eq!(first_mark, &Step::mark(2));
    }

    #[test]
    fn both_sort_and_mark_everything() {
        let inputs: &[&[Value]] = &[
            &[],
            &[1],
            &[5, 3, 8, 1],
            &[1, 1, 1],
            &[6, 5, 4, 3, 2, 1, 0],
            &[12, 3, 45, 3, 9, 0, 27, 8],
        ];
        for &input in inputs {
            for steps in [selection(input), heap(input)] {
                assert_eq!(replay(input, &steps), sorted_copy(input));
                assert_eq!(marked(&steps), (0..input.len()).collect());
            }
        }
    }
}
