//! Tracing subscriber setup for hosts embedding the editor core.
//!
//! The library only emits `tracing` events; nothing is printed unless the
//! host installs a subscriber, for example through [`init_tracing`].

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter used by [`init_tracing`].
///
/// An explicit directive (such as the `--log-filter` config value) wins.
/// Otherwise `RUST_LOG` is honoured with warnings always enabled.
pub fn build_filter(directive: Option<&str>) -> Result<EnvFilter> {
    match directive {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("Invalid log filter {directive:?}")),
        None => Ok(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())),
    }
}

/// Install a global `fmt` subscriber writing to stderr.
///
/// Fails if the filter is invalid or a global subscriber is already set.
pub fn init_tracing(directive: Option<&str>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive)?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install tracing subscriber: {err}"))
}
