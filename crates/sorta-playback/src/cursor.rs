//! Position within a step log.

use serde::{Deserialize, Serialize};

/// How far playback has progressed through a log.
///
/// `Start` sits before the first step: nothing applied, nothing marked.
/// `At(i)` means steps `0..=i` have been applied. Ordering follows the log:
/// `Start < At(0) < At(1) < ...`.
///
/// On the wire a cursor is a signed integer with `-1` for `Start`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Cursor {
    /// Before the first step
    #[default]
    Start,
    /// On step `i`, with it applied
    At(usize),
}

impl Cursor {
    /// Last valid cursor for a log of `len` steps (`Start` when empty).
    pub const fn last(len: usize) -> Self {
        match len {
            0 => Cursor::Start,
            n => Cursor::At(n - 1),
        }
    }

    /// Index of the current step, if any.
    pub const fn index(self) -> Option<usize> {
        match self {
            Cursor::Start => None,
            Cursor::At(i) => Some(i),
        }
    }

    /// Number of steps applied at this cursor.
    pub const fn applied(self) -> usize {
        match self {
            Cursor::Start => 0,
            Cursor::At(i) => i + 1,
        }
    }

    /// Clamp into `[Start, last(len)]`.
    pub fn clamp_to(self, len: usize) -> Self {
        self.min(Self::last(len))
    }

    /// One step forward, stopping at the last step.
    pub fn forward(self, len: usize) -> Self {
        let next = match self {
            Cursor::Start => Cursor::At(0),
            Cursor::At(i) => Cursor::At(i.saturating_add(1)),
        };
        next.clamp_to(len)
    }

    /// One step back, stopping at `Start`.
    pub const fn backward(self) -> Self {
        match self {
            Cursor::Start | Cursor::At(0) => Cursor::Start,
            Cursor::At(i) => Cursor::At(i - 1),
        }
    }

    /// Signed form: `-1` for `Start`.
    pub fn to_signed(self) -> i64 {
        match self {
            Cursor::Start => -1,
            Cursor::At(i) => i64::try_from(i).unwrap_or(i64::MAX),
        }
    }

    /// From the signed form. Anything negative is `Start`.
    pub fn from_signed(value: i64) -> Self {
        usize::try_from(value).map_or(Cursor::Start, Cursor::At)
    }
}

impl From<i64> for Cursor {
    fn from(value: i64) -> Self {
        Cursor::from_signed(value)
    }
}

impl From<Cursor> for i64 {
    fn from(cursor: Cursor) -> Self {
        cursor.to_signed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_orders_before_every_step() {
        assert!(Cursor::Start < Cursor::At(0));
        assert!(Cursor::At(0) < Cursor::At(5));
    }

    #[test]
    fn last_of_empty_log_is_start() {
        assert_eq!(Cursor::last(0), Cursor::Start);
        assert_eq!(Cursor::last(4), Cursor::At(3));
    }

    #[test]
    fn forward_clamps_at_end() {
        assert_eq!(Cursor::Start.forward(3), Cursor::At(0));
        assert_eq!(Cursor::At(2).forward(3), Cursor::At(2));
        assert_eq!(Cursor::Start.forward(0), Cursor::Start);
        assert_eq!(Cursor::At(usize::MAX).forward(3), Cursor::At(2));
    }

    #[test]
    fn backward_clamps_at_start() {
        assert_eq!(Cursor::At(1).backward(), Cursor::At(0));
        assert_eq!(Cursor::At(0).backward(), Cursor::Start);
        assert_eq!(Cursor::Start.backward(), Cursor::Start);
    }

    #[test]
    fn clamp_never_exceeds_log() {
        assert_eq!(Cursor::At(99).clamp_to(10), Cursor::At(9));
        assert_eq!(Cursor::At(99).clamp_to(0), Cursor::Start);
        assert_eq!(Cursor::At(3).clamp_to(10), Cursor::At(3));
    }

    #[test]
    fn applied_counts_steps() {
        assert_eq!(Cursor::Start.applied(), 0);
        assert_eq!(Cursor::At(0).applied(), 1);
        assert_eq!(Cursor::At(9).applied(), 10);
    }

    #[test]
    fn signed_round_trip() {
        assert_eq!(Cursor::from_signed(-1), Cursor::Start);
        assert_eq!(Cursor::from_signed(-40), Cursor::Start);
        assert_eq!(Cursor::from_signed(7), Cursor::At(7));
        assert_eq!(Cursor::Start.to_signed(), -1);

        let json = serde_json::to_string(&Cursor::At(3)).unwrap();
        assert_eq!(json, "3");
        let parsed: Cursor = serde_json::from_str("-1").unwrap();
        assert_eq!(parsed, Cursor::Start);
    }
}
