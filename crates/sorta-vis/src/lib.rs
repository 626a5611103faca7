//! Sorta Playback Server
//!
//! JSON and WebSocket access to sorting step logs and a live playback
//! session. No rendering happens here; clients draw frames themselves.
//!
//! # Architecture
//!
//! - **REST API**: generate logs, reconstruct frames, benchmark, drive the session
//! - **WebSocket**: streams session status on every change, accepts transport commands
//! - **Config**: `SORTA_*` environment variables
//!
//! # Usage
//!
//! ```ignore
//! let config = VisConfig::from_env();
//! let session = Session::new(config.session_config(), config.algorithm, config.initial_input())?;
//! VisServer::new(session).serve(config.addr).await?;
//! ```

mod config;
mod server;

pub use config::VisConfig;
pub use server::{AppState, VisServer};
