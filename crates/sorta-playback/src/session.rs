//! A playback session: one input, one or more algorithm lanes, one shared
//! transport.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use sorta_algorithms::{Algorithm, RandomSource, Step, Value};
use tracing::debug;

use crate::bookmarks::Bookmarks;
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::metrics::{Metrics, MetricsReport};
use crate::reconstruct::Frame;
use crate::replayer::Replayer;
use crate::speed::{PlaybackSpeed, BASE_DELAY};
use crate::transport::{Tick, Transport, TransportStatus};

/// Randomness shared by every log a session generates.
pub type SessionRng = Box<dyn RandomSource + Send + Sync>;

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Delay between auto-advance ticks at 1x
    pub base_delay: Duration,
    /// Longest accepted input
    pub max_input_len: usize,
    /// Fewest algorithms in comparison mode
    pub min_lanes: usize,
    /// Most algorithms in comparison mode
    pub max_lanes: usize,
    /// Initial playback speed
    pub speed: PlaybackSpeed,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_delay: BASE_DELAY,
            max_input_len: 100,
            min_lanes: 2,
            max_lanes: 4,
            speed: PlaybackSpeed::NORMAL,
        }
    }
}

/// One algorithm's log and its frame at the shared cursor.
#[derive(Debug, Clone)]
pub struct Lane {
    algorithm: Algorithm,
    replayer: Replayer,
}

impl Lane {
    /// Algorithm this lane runs.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The lane's full step log.
    pub fn steps(&self) -> &[Step] {
        self.replayer.steps()
    }

    /// The lane's frame at the current cursor.
    pub fn frame(&self) -> &Frame {
        self.replayer.frame()
    }

    /// Operation counts up to the lane's cursor.
    pub fn metrics(&self) -> Metrics {
        Metrics::tally(self.replayer.steps(), self.replayer.cursor())
    }

    /// Whether this lane has played its whole log. Shorter lanes finish
    /// before the session does.
    pub fn is_done(&self) -> bool {
        !self.replayer.is_empty() && self.replayer.cursor() == Cursor::last(self.replayer.len())
    }
}

/// Per-lane part of [`SessionStatus`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaneStatus {
    pub algorithm: Algorithm,
    pub total_steps: usize,
    pub cursor: Cursor,
    pub done: bool,
    pub current_step: Option<Step>,
    pub metrics: Metrics,
}

impl From<&Lane> for LaneStatus {
    fn from(lane: &Lane) -> Self {
        Self {
            algorithm: lane.algorithm,
            total_steps: lane.replayer.len(),
            cursor: lane.replayer.cursor(),
            done: lane.is_done(),
            current_step: lane.frame().current_step.clone(),
            metrics: lane.metrics(),
        }
    }
}

/// Session status for sending to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStatus {
    #[serde(flatten)]
    pub transport: TransportStatus,
    pub speed: PlaybackSpeed,
    pub comparison: bool,
    pub input_len: usize,
    pub bookmarks: Vec<usize>,
    pub lanes: Vec<LaneStatus>,
}

/// A lane's frame, labelled for clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaneFrame {
    pub algorithm: Algorithm,
    #[serde(flatten)]
    pub frame: Frame,
}

/// Everything a viewer needs: the input, the active logs, and one transport
/// driving them all.
///
/// Any change that replaces the active logs (algorithm, input, comparison
/// mode or its lanes) resets the transport and clears bookmarks.
pub struct Session {
    config: SessionConfig,
    input: Vec<Value>,
    algorithm: Algorithm,
    compared: Vec<Algorithm>,
    comparison: bool,
    lanes: Vec<Lane>,
    transport: Transport,
    bookmarks: Bookmarks,
    speed: PlaybackSpeed,
    rng: SessionRng,
}

impl Session {
    /// Create a single-lane session drawing randomness from entropy.
    pub fn new(config: SessionConfig, algorithm: Algorithm, input: Vec<Value>) -> Result<Self> {
        Self::with_rng(config, algorithm, input, Box::new(StdRng::from_entropy()))
    }

    /// Create a session whose randomized algorithms replay the same way each run.
    pub fn seeded(
        config: SessionConfig,
        algorithm: Algorithm,
        input: Vec<Value>,
        seed: u64,
    ) -> Result<Self> {
        Self::with_rng(config, algorithm, input, Box::new(StdRng::seed_from_u64(seed)))
    }

    /// Create a session drawing randomness from `rng`.
    pub fn with_rng(
        config: SessionConfig,
        algorithm: Algorithm,
        input: Vec<Value>,
        rng: SessionRng,
    ) -> Result<Self> {
        check_input(&config, &input)?;
        let compared = Algorithm::ALL
            .into_iter()
            .take(config.min_lanes.max(1))
            .collect();
        let mut session = Self {
            speed: config.speed,
            config,
            input,
            algorithm,
            compared,
            comparison: false,
            lanes: Vec::new(),
            transport: Transport::new(0),
            bookmarks: Bookmarks::new(),
            rng,
        };
        session.regenerate();
        Ok(session)
    }

    /// Limits and defaults this session was built with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The dataset every lane sorts.
    pub fn input(&self) -> &[Value] {
        &self.input
    }

    /// Algorithm shown outside comparison mode.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Algorithms shown in comparison mode.
    pub fn compared(&self) -> &[Algorithm] {
        &self.compared
    }

    /// Whether comparison mode is on.
    pub fn is_comparison(&self) -> bool {
        self.comparison
    }

    /// Active lanes: one outside comparison mode.
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    /// Shared playback transport.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Current shared cursor.
    pub fn cursor(&self) -> Cursor {
        self.transport.cursor()
    }

    /// Current playback speed.
    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    /// Bookmarked step indices.
    pub fn bookmarks(&self) -> &Bookmarks {
        &self.bookmarks
    }

    // === Log replacement ===

    fn regenerate(&mut self) {
        let algorithms = if self.comparison {
            self.compared.clone()
        } else {
            vec![self.algorithm]
        };

        self.lanes = algorithms
            .into_iter()
            .map(|algorithm| {
                let steps = algorithm.generate_steps_with(&self.input, &mut *self.rng);
                debug!(%algorithm, steps = steps.len(), "generated step log");
                Lane {
                    algorithm,
                    replayer: Replayer::new(steps, self.input.clone()),
                }
            })
            .collect();

        let longest = self.lanes.iter().map(|lane| lane.replayer.len()).max().unwrap_or(0);
        self.transport.replace_log(longest);
        self.bookmarks.clear();
    }

    /// Select the single-lane algorithm. Only replaces the active log outside
    /// comparison mode.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        if !self.comparison {
            self.regenerate();
        }
    }

    /// Replace the dataset. Rejected if longer than the configured maximum.
    pub fn set_input(&mut self, input: Vec<Value>) -> Result<()> {
        check_input(&self.config, &input)?;
        self.input = input;
        self.regenerate();
        Ok(())
    }

    /// Turn comparison mode on or off.
    pub fn set_comparison(&mut self, enabled: bool) {
        if self.comparison != enabled {
            self.comparison = enabled;
            debug!(enabled, "comparison mode");
            self.regenerate();
        }
    }

    /// Replace the compared algorithms wholesale.
    pub fn set_compared(&mut self, algorithms: Vec<Algorithm>) -> Result<()> {
        self.check_lane_count(algorithms.len())?;
        self.compared = algorithms;
        self.lanes_changed();
        Ok(())
    }

    /// Append a compared algorithm.
    pub fn add_lane(&mut self, algorithm: Algorithm) -> Result<()> {
        self.check_lane_count(self.compared.len() + 1)?;
        self.compared.push(algorithm);
        self.lanes_changed();
        Ok(())
    }

    /// Drop the compared algorithm at `index`.
    pub fn remove_lane(&mut self, index: usize) -> Result<()> {
        self.check_lane_index(index)?;
        self.check_lane_count(self.compared.len() - 1)?;
        self.compared.remove(index);
        self.lanes_changed();
        Ok(())
    }

    /// Swap the compared algorithm at `index`.
    pub fn replace_lane(&mut self, index: usize, algorithm: Algorithm) -> Result<()> {
        self.check_lane_index(index)?;
        self.compared[index] = algorithm;
        self.lanes_changed();
        Ok(())
    }

    fn lanes_changed(&mut self) {
        debug!(lanes = ?self.compared, "compared algorithms changed");
        if self.comparison {
            self.regenerate();
        }
    }

    fn check_lane_count(&self, actual: usize) -> Result<()> {
        let (min, max) = (self.config.min_lanes, self.config.max_lanes);
        if (min..=max).contains(&actual) {
            Ok(())
        } else {
            Err(Error::LaneCount { min, max, actual })
        }
    }

    fn check_lane_index(&self, index: usize) -> Result<()> {
        let lanes = self.compared.len();
        if index < lanes {
            Ok(())
        } else {
            Err(Error::LaneIndex { index, lanes })
        }
    }

    // === Transport ===

    /// Move every lane to the shared cursor, clamped to its own log.
    fn sync_lanes(&mut self) {
        let cursor = self.transport.cursor();
        for lane in &mut self.lanes {
            lane.replayer.seek(cursor);
        }
    }

    fn transition(&mut self, op: &'static str, apply: impl FnOnce(&mut Transport)) {
        apply(&mut self.transport);
        self.sync_lanes();
        debug!(
            op,
            cursor = self.transport.cursor().to_signed(),
            state = ?self.transport.state(),
            "transport"
        );
    }

    /// Start or resume auto-advancing.
    pub fn play(&mut self) {
        self.transition("play", Transport::play);
    }

    /// Stop auto-advancing.
    pub fn pause(&mut self) {
        self.transition("pause", Transport::pause);
    }

    /// Return every lane to before the first step.
    pub fn reset(&mut self) {
        self.transition("reset", Transport::reset);
    }

    /// Advance one step.
    pub fn step_forward(&mut self) {
        self.transition("step_forward", Transport::step_forward);
    }

    /// Go back one step.
    pub fn step_backward(&mut self) {
        self.transition("step_backward", Transport::step_backward);
    }

    /// Jump to `target`, clamped to the log.
    pub fn seek(&mut self, target: Cursor) {
        self.transition("seek", |transport| transport.seek(target));
    }

    /// Change speed. A pending tick is invalidated so the next one is
    /// scheduled with the new delay.
    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.speed = speed;
        self.transport.reschedule();
        debug!(multiplier = speed.multiplier(), "speed changed");
    }

    /// The next auto-advance wake-up and how long to wait for it.
    pub fn next_wakeup(&self) -> Option<(Duration, Tick)> {
        self.transport
            .pending_tick()
            .map(|tick| (self.speed.delay(self.config.base_delay), tick))
    }

    /// Deliver a wake-up. Returns whether the session changed.
    pub fn on_tick(&mut self, tick: Tick) -> bool {
        if !self.transport.on_tick(tick) {
            return false;
        }
        self.sync_lanes();
        true
    }

    // === Bookmarks ===

    /// Toggle a bookmark on `index`. Returns whether it is now set, or `None`
    /// if the index is past the end of the log.
    pub fn toggle_bookmark(&mut self, index: usize) -> Option<bool> {
        (index < self.transport.len()).then(|| self.bookmarks.toggle(index))
    }

    /// Seek to the first bookmark after the cursor, if any.
    pub fn seek_next_bookmark(&mut self) -> Option<usize> {
        let next = self.bookmarks.next_after(self.cursor())?;
        self.seek(Cursor::At(next));
        Some(next)
    }

    /// Seek to the last bookmark before the cursor, if any.
    pub fn seek_prev_bookmark(&mut self) -> Option<usize> {
        let prev = self.bookmarks.prev_before(self.cursor())?;
        self.seek(Cursor::At(prev));
        Some(prev)
    }

    // === Views ===

    /// Snapshot of transport, mode and lanes.
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            transport: (&self.transport).into(),
            speed: self.speed,
            comparison: self.comparison,
            input_len: self.input.len(),
            bookmarks: self.bookmarks.iter().collect(),
            lanes: self.lanes.iter().map(LaneStatus::from).collect(),
        }
    }

    /// Current frame of every lane.
    pub fn frames(&self) -> Vec<LaneFrame> {
        self.lanes
            .iter()
            .map(|lane| LaneFrame {
                algorithm: lane.algorithm,
                frame: lane.frame().clone(),
            })
            .collect()
    }

    /// Copyable metrics for the first lane.
    pub fn report(&self) -> Option<MetricsReport> {
        self.lanes.first().map(|lane| MetricsReport {
            algorithm: lane.algorithm,
            input_len: self.input.len(),
            total_steps: lane.replayer.len(),
            metrics: lane.metrics(),
        })
    }
}

fn check_input(config: &SessionConfig, input: &[Value]) -> Result<()> {
    if input.len() > config.max_input_len {
        return Err(Error::InputTooLarge {
            len: input.len(),
            max: config.max_input_len,
        });
    }
    Ok(())
}
