//! Tracing initialization.

use anyhow::Context;
use tracing_subscriber::{fmt, EnvFilter, prelude::*};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,noobchat=debug,tower_http=info,axum=info";

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the filter, e.g.
/// RUST_LOG=debug,noobchat=trace,tower_http=info
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .context("invalid log filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).compact())
        .try_init()
        .context("tracing subscriber already installed")?;
    Ok(())
}
