//! Bogo sort: shuffle until sorted, within a fixed shuffle ceiling.

use crate::random::RandomSource;
use crate::recorder::Recorder;
use crate::step::{Step, Value};

/// Upper bound on shuffles before bogo sort gives up.
pub const BOGO_MAX_SHUFFLES: usize = 1000;

/// Bogo sort.
///
/// Checks order with a left-to-right compare scan and, while unsorted,
/// Fisher-Yates shuffles using `rng`. After [`BOGO_MAX_SHUFFLES`] shuffles
/// the log ends even if the array is still unsorted. Every index is marked
/// at the end either way.
pub fn bogo(input: &[Value], rng: &mut dyn RandomSource) -> Vec<Step> {
    let mut rec = Recorder::new(input);
    let mut shuffles = 0;

    while !scan_sorted(&mut rec) {
        if shuffles == BOGO_MAX_SHUFFLES {
            tracing::debug!(
                len = rec.len(),
                shuffles,
                "bogo sort hit shuffle ceiling, leaving array unsorted"
            );
            break;
        }
        shuffle(&mut rec, rng);
        shuffles += 1;
    }

    rec.mark_all();
    rec.finish()
}

/// Compare neighbours left to right, stopping at the first descent.
fn scan_sorted(rec: &mut Recorder) -> bool {
    for i in 1..rec.len() {
        if rec.compare(i - 1, i).is_gt() {
            return false;
        }
    }
    true
}

fn shuffle(rec: &mut Recorder, rng: &mut dyn RandomSource) {
    for i in (1..rec.len()).rev() {
        let j = rng.below(i + 1);
        if i != j {
            rec.swap(i, j);
        }
    }
}
