use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::shared::config::Config;

/// Инициализация системы трассировки (tracing)
///
/// Level comes from RUST_LOG, otherwise from `[logging] level`.
/// A host that already installed a subscriber keeps it.
pub fn initialize(config: &Config) -> anyhow::Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.level.clone());
    let filter = tracing_subscriber::EnvFilter::try_new(&log_level)?;

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
    {
        tracing::debug!("Tracing subscriber already set: {}", e);
    }

    Ok(())
}
