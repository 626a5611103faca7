//! Sorta Playback
//!
//! Deterministic, seekable playback of sorting step logs.
//!
//! # Architecture
//!
//! - **Reconstruction**: rebuild array contents and the sorted set at any cursor
//! - **Replayer**: the same, applying or undoing one step at a time
//! - **Transport**: play / pause / step / seek state machine with tick epochs
//! - **Session**: one input, one or more algorithm lanes, bookmarks, metrics
//! - **Player**: tokio task that auto-advances a session
//!
//! # Usage
//!
//! ```
//! use sorta_algorithms::Algorithm;
//! use sorta_playback::{reconstruct, Cursor};
//!
//! let input = [5, 3, 8, 1];
//! let steps = Algorithm::Bubble.generate_steps(&input);
//! let frame = reconstruct(&steps, Cursor::last(steps.len()), &input);
//! assert_eq!(frame.array, vec![1, 3, 5, 8]);
//! ```

mod benchmark;
mod bookmarks;
mod cursor;
mod error;
mod metrics;
mod player;
mod reconstruct;
mod replayer;
mod session;
mod speed;
mod transport;

pub use benchmark::{benchmark, BenchmarkRow};
pub use bookmarks::Bookmarks;
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use metrics::{Metrics, MetricsReport};
pub use player::Player;
pub use reconstruct::{apply_step, reconstruct, Frame};
pub use replayer::Replayer;
pub use session::{Lane, LaneFrame, LaneStatus, Session, SessionConfig, SessionRng, SessionStatus};
pub use speed::{PlaybackSpeed, BASE_DELAY};
pub use transport::{Tick, Transport, TransportState, TransportStatus};
