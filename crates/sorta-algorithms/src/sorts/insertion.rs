//! Insertion sort and its gapped generalisation, shell sort.
//!
//! Both hold the element being inserted aside and shift larger elements up
//! one gap at a time. Shifts are plain writes, so they are logged as
//! overwrites rather than swaps; the held element is written once at the end
//! if it moved.

use crate::recorder::Recorder;
use crate::step::{Step, Value};

/// Insertion sort.
pub fn insertion(input: &[Value]) -> Vec<Step> {
    let mut rec = Recorder::new(input);
    gapped_insertion_pass(&mut rec, 1);
    rec.mark_all();
    rec.finish()
}

/// Shell sort with the halving gap sequence `n/2, n/4, ..., 1`.
pub fn shell(input: &[Value]) -> Vec<Step> {
    let mut rec = Recorder::new(input);
    let mut gap = rec.len() / 2;

    while gap > 0 {
        gapped_insertion_pass(&mut rec, gap);
        gap /= 2;
    }

    rec.mark_all();
    rec.finish()
}

fn gapped_insertion_pass(rec: &mut Recorder, gap: usize) {
    for i in gap..rec.len() {
        let key = rec.value(i);
        let mut hole = i;

        while hole >= gap {
            rec.note_compare(hole - gap, hole);
            let candidate = rec.value(hole - gap);
            if candidate <= key {
                break;
            }
            rec.overwrite(hole, candidate);
            hole -= gap;
        }

        if hole != i {
            rec.overwrite(hole, key);
        }
    }
}
