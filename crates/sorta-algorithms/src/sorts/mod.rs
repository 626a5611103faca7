//! One step generator per algorithm.
//!
//! Every generator copies its input into a [`Recorder`](crate::recorder::Recorder),
//! runs the textbook control flow against that copy and returns the recorded
//! log. None of them touch the caller's slice.

mod bogo;
mod counting;
mod exchange;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use bogo::{bogo, BOGO_MAX_SHUFFLES};
pub use counting::counting;
pub use exchange::{bubble, cocktail_shaker, comb, gnome};
pub use insertion::{insertion, shell};
pub use merge::merge;
pub use quick::quick;
pub use selection::{heap, selection};
