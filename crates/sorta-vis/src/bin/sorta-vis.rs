//! Sorta Playback Server
//!
//! Start a session from `SORTA_*` settings and serve it.

use sorta_playback::Session;
use sorta_vis::{VisConfig, VisServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sorta_vis=info,sorta_playback=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = VisConfig::from_env();
    let input = config.initial_input();
    tracing::info!(
        algorithm = %config.algorithm,
        size = input.len(),
        seeded = config.seed.is_some(),
        "Starting session"
    );

    let session = match config.seed {
        Some(seed) => Session::seeded(config.session_config(), config.algorithm, input, seed)?,
        None => Session::new(config.session_config(), config.algorithm, input)?,
    };

    VisServer::new(session).serve(config.addr).await?;
    Ok(())
}
