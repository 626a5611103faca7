//! Working array that records every operation performed on it.

use std::cmp::Ordering;
use std::ops::Range;

use crate::step::{Step, Value};

/// A generator's private copy of the input plus the log of what was done to it.
///
/// Mutating methods apply the change to the working array immediately, so
/// later decisions are made against the same state a replay would produce.
pub(crate) struct Recorder {
    array: Vec<Value>,
    steps: Vec<Step>,
}

impl Recorder {
    pub(crate) fn new(input: &[Value]) -> Self {
        Self {
            array: input.to_vec(),
            steps: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.array.len()
    }

    pub(crate) fn value(&self, index: usize) -> Value {
        self.array[index]
    }

    /// Snapshot of the working array.
    pub(crate) fn values(&self) -> &[Value] {
        &self.array
    }

    /// Record a comparison and return `array[a].cmp(&array[b])`.
    pub(crate) fn compare(&mut self, a: usize, b: usize) -> Ordering {
        self.steps.push(Step::compare(a, b));
        self.array[a].cmp(&self.array[b])
    }

    /// Record a comparison whose operands live outside the working array
    /// (a held key, a merge buffer). The caller compares the real values.
    pub(crate) fn note_compare(&mut self, a: usize, b: usize) {
        self.steps.push(Step::compare(a, b));
    }

    pub(crate) fn inspect(&mut self, index: usize) {
        self.steps.push(Step::inspect(index));
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.steps.push(Step::swap(a, b));
        self.array.swap(a, b);
    }

    pub(crate) fn overwrite(&mut self, index: usize, value: Value) {
        self.steps.push(Step::overwrite(index, value));
        self.array[index] = value;
    }

    pub(crate) fn mark(&mut self, index: usize) {
        self.steps.push(Step::mark(index));
    }

    pub(crate) fn mark_range(&mut self, range: Range<usize>) {
        self.steps.extend(range.map(Step::mark));
    }

    pub(crate) fn mark_all(&mut self) {
        self.mark_range(0..self.len());
    }

    pub(crate) fn finish(self) -> Vec<Step> {
        self.steps
    }
}
