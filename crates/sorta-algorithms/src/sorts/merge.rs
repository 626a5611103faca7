//! Top-down merge sort.

use crate::recorder::Recorder;
use crate::step::{Step, Value};

/// Merge sort. After every merge the whole merged range is marked, so inner
/// positions are marked repeatedly as ranges grow.
pub fn merge(input: &[Value]) -> Vec<Step> {
    let mut rec = Recorder::new(input);
    match rec.len() {
        0 => {}
        // No merge ever runs, so nothing else would mark it
        1 => rec.mark(0),
        n => sort_range(&mut rec, 0, n - 1),
    }
    rec.finish()
}

/// Sort the inclusive range `left..=right`.
fn sort_range(rec: &mut Recorder, left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    sort_range(rec, left, mid);
    sort_range(rec, mid + 1, right);
    merge_halves(rec, left, mid, right);
}

fn merge_halves(rec: &mut Recorder, left: usize, mid: usize, right: usize) {
    let lower = rec.values()[left..=mid].to_vec();
    let upper = rec.values()[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < lower.len() && j < upper.len() {
        rec.note_compare(left + i, mid + 1 + j);
        if lower[i] <= upper[j] {
            rec.overwrite(k, lower[i]);
            i += 1;
        } else {
            rec.overwrite(k, upper[j]);
            j += 1;
        }
        k += 1;
    }

    for &value in lower[i..].iter().chain(&upper[j..]) {
        rec.overwrite(k, value);
        k += 1;
    }

    rec.mark_range(left..right + 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::testing::{count, marked, replay, sorted_copy};
    use crate::step::StepKind;

    #[test]
    fn merge_sorts() {
        let inputs: &[&[Value]] = &[
            &[],
            &[3],
            &[2, 1],
            &[5, 3, 8, 1],
            &[8, 7, 6, 5, 4, 3, 2, 1, 0],
            &[2, 2, 1, 1, 0, 0],
        ];
        for &input in inputs {
            let steps = merge(input);
            assert_eq!(replay(input, &steps), sorted_copy(input));
            assert_eq!(marked(&steps), (0..input.len()).collect());
            assert_eq!(count(&steps, StepKind::Swap), 0);
        }
    }

    #[test]
    fn merge_two_elements() {
        assert_eq!(
            merge(&[2, 1]),
            vec![
                Step::compare(0, 1),
                Step::overwrite(0, 1),
                Step::overwrite(1, 2),
                Step::mark(0),
                Step::mark(1),
            ]
        );
    }

    #[test]
    fn repeated_marks_are_emitted() {
        let steps = merge(&[4, 3, 2, 1]);
        // Ranges [0,1], [2,3], [0,3]
        assert_eq!(count(&steps, StepKind::Mark), 8);
    }

    #[test]
    fn writes_every_position_per_merge() {
        let steps = merge(&[4, 3, 2, 1]);
        assert_eq!(count(&steps, StepKind::Overwrite), 8);
    }
}
