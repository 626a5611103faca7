//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sorta_algorithms::{Algorithm, Value};
use sorta_playback::{PlaybackSpeed, SessionConfig};
use tracing::warn;

/// Largest value in a generated dataset.
const MAX_GENERATED_VALUE: Value = 100;

/// Configuration for the visualization server.
#[derive(Debug, Clone, PartialEq)]
pub struct VisConfig {
    /// HTTP listen address
    pub addr: SocketAddr,
    /// Algorithm selected at startup
    pub algorithm: Algorithm,
    /// Initial playback speed
    pub speed: PlaybackSpeed,
    /// Longest accepted input
    pub max_input_len: usize,
    /// Length of the generated startup dataset
    pub size: usize,
    /// Seed for the dataset and for randomized algorithms
    pub seed: Option<u64>,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            algorithm: Algorithm::default(),
            speed: PlaybackSpeed::NORMAL,
            max_input_len: 100,
            size: 30,
            seed: None,
        }
    }
}

impl VisConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from any key lookup. Unparseable values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let max_input_len = parse_or(&lookup, "SORTA_MAX_INPUT", defaults.max_input_len);
        let size = parse_or(&lookup, "SORTA_SIZE", defaults.size).min(max_input_len);

        Self {
            addr: parse_or(&lookup, "SORTA_ADDR", defaults.addr),
            algorithm: parse_or(&lookup, "SORTA_ALGORITHM", defaults.algorithm),
            speed: PlaybackSpeed::new(parse_or(&lookup, "SORTA_SPEED", defaults.speed.multiplier())),
            max_input_len,
            size,
            seed: lookup("SORTA_SEED").and_then(|raw| parse(&raw, "SORTA_SEED")),
        }
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            max_input_len: self.max_input_len,
            speed: self.speed,
            ..SessionConfig::default()
        }
    }

    /// Random dataset of `size` values in `1..=100`. Repeats when seeded.
    pub fn initial_input(&self) -> Vec<Value> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        (0..self.size)
            .map(|_| rng.gen_range(1..=MAX_GENERATED_VALUE))
            .collect()
    }
}

fn parse<T: FromStr>(raw: &str, key: &str) -> Option<T> {
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = raw, "ignoring unparseable setting");
            None
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|raw| parse(&raw, key))
        .unwrap_or(default)
}
