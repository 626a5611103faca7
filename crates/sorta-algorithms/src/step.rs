//! Atomic, replayable sorting steps.
//!
//! A [`Step`] is one observable effect of a sorting algorithm. The array
//! contents at any point of a run can be rebuilt from the original input by
//! applying every [`StepKind::Swap`] and [`StepKind::Overwrite`] in order;
//! [`StepKind::Compare`] and [`StepKind::Mark`] never touch array contents.

use std::fmt;

use crate::error::{Error, Result};

/// Element type of the arrays being sorted.
pub type Value = u32;

/// The closed set of operations a generator can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StepKind {
    /// Elements were read and compared (or, with one index, merely inspected)
    Compare,
    /// Two positions exchanged their values
    Swap,
    /// Values were written to positions
    Overwrite,
    /// Positions reached their final place
    Mark,
}

impl StepKind {
    /// Whether replaying this kind changes array contents.
    pub const fn is_mutating(self) -> bool {
        matches!(self, StepKind::Swap | StepKind::Overwrite)
    }

    /// Lower-case name, as used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            StepKind::Compare => "compare",
            StepKind::Swap => "swap",
            StepKind::Overwrite => "overwrite",
            StepKind::Mark => "mark",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One atomic instruction in a step log.
///
/// Build steps through the constructors; they guarantee the shape each kind
/// needs (a swap names exactly two indices, an overwrite pairs every index
/// with a value). Steps that arrive from outside the process should go
/// through [`Step::validate`] before replay.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind: StepKind,
    indices: Vec<usize>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    values: Option<Vec<Value>>,
}

impl Step {
    /// Compare the elements at `a` and `b`.
    pub fn compare(a: usize, b: usize) -> Self {
        Self {
            kind: StepKind::Compare,
            indices: vec![a, b],
            values: None,
        }
    }

    /// Read a single element.
    ///
    /// Encoded as a one-index [`StepKind::Compare`]: distribution sorts use it
    /// to show each element being counted, with no actual comparison.
    pub fn inspect(index: usize) -> Self {
        Self {
            kind: StepKind::Compare,
            indices: vec![index],
            values: None,
        }
    }

    /// Exchange the elements at `a` and `b`.
    pub fn swap(a: usize, b: usize) -> Self {
        Self {
            kind: StepKind::Swap,
            indices: vec![a, b],
            values: None,
        }
    }

    /// Write `value` to `index`.
    pub fn overwrite(index: usize, value: Value) -> Self {
        Self {
            kind: StepKind::Overwrite,
            indices: vec![index],
            values: Some(vec![value]),
        }
    }

    /// Record that `index` holds its final value.
    pub fn mark(index: usize) -> Self {
        Self {
            kind: StepKind::Mark,
            indices: vec![index],
            values: None,
        }
    }

    /// What this step does.
    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// Positions this step refers to.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Written values, paired positionally with [`Step::indices`].
    /// Present only for overwrites.
    pub fn values(&self) -> Option<&[Value]> {
        self.values.as_deref()
    }

    /// Iterate `(index, value)` writes. Empty unless this is an overwrite.
    pub fn writes(&self) -> impl Iterator<Item = (usize, Value)> + '_ {
        self.values
            .iter()
            .flat_map(|values| self.indices.iter().copied().zip(values.iter().copied()))
    }

    /// Check the step is well-formed for an array of length `len`.
    pub fn validate(&self, len: usize) -> Result<()> {
        if let Some(&index) = self.indices.iter().find(|&&i| i >= len) {
            return Err(Error::IndexOutOfRange { index, len });
        }
        let well_formed = match self.kind {
            StepKind::Swap => self.indices.len() == 2 && self.values.is_none(),
            StepKind::Overwrite => self
                .values
                .as_ref()
                .is_some_and(|values| values.len() == self.indices.len()),
            StepKind::Compare | StepKind::Mark => self.values.is_none(),
        };
        if well_formed {
            Ok(())
        } else {
            Err(Error::MalformedStep(self.kind))
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.indices)?;
        if let Some(values) = &self.values {
            write!(f, " <- {:?}", values)?;
        }
        Ok(())
    }
}

/// Validate a whole log against an input of length `len`.
///
/// Returns the position of the first bad step alongside its error.
pub fn validate_log(steps: &[Step], len: usize) -> std::result::Result<(), (usize, Error)> {
    steps
        .iter()
        .enumerate()
        .try_for_each(|(position, step)| step.validate(len).map_err(|e| (position, e)))
}
