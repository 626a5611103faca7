//! Counting sort.

use std::collections::BTreeMap;

use crate::recorder::Recorder;
use crate::step::{Step, Value};

/// Counting sort, bucketing by distinct value.
///
/// The counting pass emits a one-index compare per element to show each
/// read. Placement walks the input backwards (stable) and writes straight
/// into the output positions, which are marked once the pass completes.
pub fn counting(input: &[Value]) -> Vec<Step> {
    let mut rec = Recorder::new(input);
    let n = rec.len();

    // Sparse buckets: a wide value range must not cost memory
    let mut counts: BTreeMap<Value, usize> = BTreeMap::new();
    for (i, &value) in input.iter().enumerate() {
        rec.inspect(i);
        *counts.entry(value).or_default() += 1;
    }

    // Prefix sums: each bucket becomes one past the last slot for its value
    let mut running = 0;
    for count in counts.values_mut() {
        running += *count;
        *count = running;
    }

    for &value in input.iter().rev() {
        if let Some(slot) = counts.get_mut(&value) {
            *slot -= 1;
            rec.overwrite(*slot, value);
        }
    }

    rec.mark_range(0..n);
    rec.finish()
}
