//! Transport state machine for stepping through a log.

use serde::{Deserialize, Serialize};

use crate::cursor::Cursor;

/// Current state of playback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportState {
    /// Cursor before the first step, nothing played
    #[default]
    Idle,
    /// Auto-advancing
    Playing,
    /// Stopped mid-sequence
    Paused,
    /// Reached the last step
    Finished,
}

/// A pending auto-advance wake-up, valid only for the epoch it was issued in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    epoch: u64,
}

/// Cursor and transport state for one log.
///
/// The transport knows only the log's length. Every externally requested
/// transition bumps the epoch, which invalidates any [`Tick`] handed out
/// before it.
#[derive(Debug, Clone)]
pub struct Transport {
    len: usize,
    cursor: Cursor,
    state: TransportState,
    epoch: u64,
}

impl Transport {
    /// Create a transport for a log of `len` steps.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            cursor: Cursor::Start,
            state: TransportState::Idle,
            epoch: 0,
        }
    }

    /// Get the current cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Get the current transport state.
    pub fn state(&self) -> TransportState {
        self.state
    }

    /// Length of the log being played.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the log has no steps.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Counter bumped by every transition; ticks carry it.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Last valid cursor.
    pub fn last(&self) -> Cursor {
        Cursor::last(self.len)
    }

    fn bump(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Start auto-advancing. Playing from the last step restarts from the
    /// beginning.
    pub fn play(&mut self) {
        if self.cursor >= self.last() {
            self.cursor = Cursor::Start;
        }
        self.state = TransportState::Playing;
        self.bump();
    }

    /// Stop auto-advancing, keeping the cursor.
    pub fn pause(&mut self) {
        self.state = TransportState::Paused;
        self.bump();
    }

    /// Return to before the first step.
    pub fn reset(&mut self) {
        self.cursor = Cursor::Start;
        self.state = TransportState::Idle;
        self.bump();
    }

    /// Advance one step. Landing on the last step finishes; otherwise the
    /// state is left as it was.
    pub fn step_forward(&mut self) {
        self.cursor = self.cursor.forward(self.len);
        if self.cursor == self.last() {
            self.state = TransportState::Finished;
        }
        self.bump();
    }

    /// Go back one step. Always pauses, or idles when back at the start.
    pub fn step_backward(&mut self) {
        self.cursor = self.cursor.backward();
        self.state = if self.cursor == Cursor::Start {
            TransportState::Idle
        } else {
            TransportState::Paused
        };
        self.bump();
    }

    /// Jump to `target`, clamped to the log.
    ///
    /// Leaves the transport in the state stepping there would: `Idle` at the
    /// start, `Finished` on the last step, `Paused` anywhere else.
    pub fn seek(&mut self, target: Cursor) {
        self.cursor = target.clamp_to(self.len);
        self.state = if self.cursor == Cursor::Start {
            TransportState::Idle
        } else if self.cursor == self.last() {
            TransportState::Finished
        } else {
            TransportState::Paused
        };
        self.bump();
    }

    /// Swap in a different log. Never carries the cursor across.
    pub fn replace_log(&mut self, len: usize) {
        self.len = len;
        self.reset();
    }

    /// Invalidate outstanding ticks without changing state (speed change).
    pub fn reschedule(&mut self) {
        self.bump();
    }

    /// The tick to schedule next, if auto-advancing.
    pub fn pending_tick(&self) -> Option<Tick> {
        (self.state == TransportState::Playing).then_some(Tick { epoch: self.epoch })
    }

    /// Handle an auto-advance wake-up.
    ///
    /// Stale ticks (issued before the last transition) and ticks arriving
    /// while not playing are ignored. On the last step the tick finishes
    /// playback instead of advancing. Returns whether anything changed.
    pub fn on_tick(&mut self, tick: Tick) -> bool {
        if tick.epoch != self.epoch || self.state != TransportState::Playing {
            return false;
        }
        if self.cursor < self.last() {
            self.cursor = self.cursor.forward(self.len);
        } else {
            self.state = TransportState::Finished;
        }
        true
    }

    /// Calculate progress as a fraction (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        if self.len == 0 {
            0.0
        } else {
            self.cursor.applied() as f64 / self.len as f64
        }
    }
}

/// Transport status for sending to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportStatus {
    pub cursor: Cursor,
    pub total_steps: usize,
    pub state: TransportState,
    pub progress: f64,
}

impl From<&Transport> for TransportStatus {
    fn from(transport: &Transport) -> Self {
        Self {
            cursor: transport.cursor,
            total_steps: transport.len,
            state: transport.state,
            progress: transport.progress(),
        }
    }
}
