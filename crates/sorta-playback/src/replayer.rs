//! Incremental reconstruction for a cursor that mostly moves one step.

use sorta_algorithms::{Step, StepKind, Value};

use crate::cursor::Cursor;
use crate::reconstruct::{fits, Frame};

/// Owns one log and keeps the frame at its cursor.
///
/// Moving the cursor by one applies or undoes a single step. Any larger
/// jump replays from the input, so the frame always equals
/// [`reconstruct`](crate::reconstruct) at the same cursor.
#[derive(Debug, Clone)]
pub struct Replayer {
    steps: Vec<Step>,
    input: Vec<Value>,
    frame: Frame,
    /// How many applied marks name each index
    mark_counts: Vec<u32>,
    /// Values displaced by each applied overwrite, newest last
    displaced: Vec<Vec<Value>>,
}

impl Replayer {
    /// Create a replayer positioned before the first step.
    pub fn new(steps: Vec<Step>, input: Vec<Value>) -> Self {
        let frame = Frame::initial(&input);
        let mark_counts = vec![0; input.len()];
        Self {
            steps,
            input,
            frame,
            mark_counts,
            displaced: Vec::new(),
        }
    }

    /// The log being replayed.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The array before any step.
    pub fn input(&self) -> &[Value] {
        &self.input
    }

    /// Number of steps in the log.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the log has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Position of the current frame.
    pub fn cursor(&self) -> Cursor {
        self.frame.cursor
    }

    /// The frame at the cursor.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Move to `target` (clamped) and return the frame there.
    pub fn seek(&mut self, target: Cursor) -> &Frame {
        let target = target.clamp_to(self.steps.len());
        let current = self.frame.cursor;

        if target == current {
            // nothing to do
        } else if target == current.forward(self.steps.len()) {
            self.apply_next();
        } else if target == current.backward() {
            self.undo_current();
        } else {
            self.rewind();
            while self.frame.cursor < target {
                self.apply_next();
            }
        }

        self.frame.current_step = target.index().and_then(|i| self.steps.get(i)).cloned();
        &self.frame
    }

    fn rewind(&mut self) {
        self.frame = Frame::initial(&self.input);
        self.mark_counts.iter_mut().for_each(|count| *count = 0);
        self.displaced.clear();
    }

    fn apply_next(&mut self) {
        let next = self.frame.cursor.applied();
        let Some(step) = self.steps.get(next) else {
            return;
        };
        self.frame.cursor = Cursor::At(next);
        if !fits(step, self.input.len()) {
            return;
        }

        let array = &mut self.frame.array;
        match step.kind() {
            StepKind::Swap => {
                if let &[a, b] = step.indices() {
                    array.swap(a, b);
                }
            }
            StepKind::Overwrite => {
                self.displaced
                    .push(step.indices().iter().map(|&i| array[i]).collect());
                for (index, value) in step.writes() {
                    array[index] = value;
                }
            }
            StepKind::Mark => {
                for &index in step.indices() {
                    self.mark_counts[index] += 1;
                    self.frame.sorted.insert(index);
                }
            }
            StepKind::Compare => {}
        }
    }

    fn undo_current(&mut self) {
        let Cursor::At(current) = self.frame.cursor else {
            return;
        };
        self.frame.cursor = self.frame.cursor.backward();
        let step = &self.steps[current];
        if !fits(step, self.input.len()) {
            return;
        }

        let array = &mut self.frame.array;
        match step.kind() {
            StepKind::Swap => {
                if let &[a, b] = step.indices() {
                    array.swap(a, b);
                }
            }
            StepKind::Overwrite => {
                if let Some(previous) = self.displaced.pop() {
                    // Reverse order restores the oldest value on repeated indices
                    for (&index, &value) in step.indices().iter().zip(&previous).rev() {
                        array[index] = value;
                    }
                }
            }
            StepKind::Mark => {
                for &index in step.indices() {
                    let count = &mut self.mark_counts[index];
                    *count = count.saturating_sub(1);
                    if *count == 0 {
                        self.frame.sorted.remove(&index);
                    }
                }
            }
            StepKind::Compare => {}
        }
    }
}
