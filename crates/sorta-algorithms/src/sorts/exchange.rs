//! Adjacent- and gapped-exchange sorts: bubble, cocktail shaker, comb, gnome.

use crate::recorder::Recorder;
use crate::step::{Step, Value};

/// Comb sort shrinks its gap by 1.3 each pass, expressed as `gap * 10 / 13`.
const COMB_SHRINK_NUM: usize = 10;
const COMB_SHRINK_DEN: usize = 13;

/// Bubble sort. Marks settle from the end inward, then index 0.
pub fn bubble(input: &[Value]) -> Vec<Step> {
    let mut rec = Recorder::new(input);
    let n = rec.len();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if rec.compare(j, j + 1).is_gt() {
                rec.swap(j, j + 1);
            }
        }
        // Largest remaining element has bubbled to n - i - 1
        rec.mark(n - i - 1);
    }

    if n > 0 {
        rec.mark(0);
    }
    rec.finish()
}

/// Cocktail shaker sort: alternating forward and backward bubble passes.
pub fn cocktail_shaker(input: &[Value]) -> Vec<Step> {
    let mut rec = Recorder::new(input);
    let n = rec.len();
    if n == 0 {
        return rec.finish();
    }

    let mut start = 0;
    let mut end = n - 1;

    loop {
        let mut swapped = false;
        for i in start..end {
            if rec.compare(i, i + 1).is_gt() {
                rec.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        rec.mark(end);
        end -= 1;

        swapped = false;
        for i in (start + 1..=end).rev() {
            if rec.compare(i - 1, i).is_gt() {
                rec.swap(i - 1, i);
                swapped = true;
            }
        }
        rec.mark(start);
        start += 1;

        if !swapped {
            break;
        }
    }

    rec.mark_range(start..end + 1);
    rec.finish()
}

/// Comb sort: bubble sort over a shrinking gap, finishing with gap 1 passes
/// until a pass makes no swap.
pub fn comb(input: &[Value]) -> Vec<Step> {
    let mut rec = Recorder::new(input);
    let n = rec.len();
    let mut gap = n;
    let mut sorted = false;

    while !sorted {
        gap = gap * COMB_SHRINK_NUM / COMB_SHRINK_DEN;
        if gap <= 1 {
            gap = 1;
            sorted = true;
        }

        let mut i = 0;
        while i + gap < n {
            if rec.compare(i, i + gap).is_gt() {
                rec.swap(i, i + gap);
                sorted = false;
            }
            i += 1;
        }
    }

    rec.mark_all();
    rec.finish()
}

/// Gnome sort: walk forward while ordered, swap and step back otherwise.
pub fn gnome(input: &[Value]) -> Vec<Step> {
    let mut rec = Recorder::new(input);
    let n = rec.len();
    let mut pos = 0;

    while pos < n {
        if pos == 0 {
            pos += 1;
            continue;
        }
        if rec.compare(pos, pos - 1).is_ge() {
            pos += 1;
        } else {
            rec.swap(pos, pos - 1);
            pos -= 1;
        }
    }

    rec.mark_all();
    rec.finish()
}
