//! Tracing subscriber setup
//!
//! The subscriber is installed before configuration is read so that
//! configuration warnings are logged. The configured `log_level` is
//! applied afterwards through a reload handle.

use anyhow::anyhow;
use tracing_subscriber::{
    layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Level used until configuration has been loaded
const BOOTSTRAP_LEVEL: &str = "info";

/// Filter directive for the service crates at `level`
pub fn log_directive(level: &str) -> String {
    format!(
        "tdee_server={level},tdee_core={level},tower_http=debug",
        level = level
    )
}

/// Handle to the installed filter
pub struct TracingHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    /// `RUST_LOG` was set and takes precedence over configuration
    from_env: bool,
}

/// Install the global subscriber
pub fn init_tracing() -> anyhow::Result<TracingHandle> {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(log_directive(BOOTSTRAP_LEVEL)), false),
    };
    let (filter_layer, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(TracingHandle {
        filter: handle,
        from_env,
    })
}

impl TracingHandle {
    /// Switch to the configured level unless `RUST_LOG` was set
    pub fn apply_log_level(&self, level: &str) -> anyhow::Result<()> {
        if self.from_env {
            return Ok(());
        }

        let filter = EnvFilter::try_new(log_directive(level))
            .map_err(|e| anyhow!("Invalid log_level '{}': {}", level, e))?;
        self.filter
            .reload(filter)
            .map_err(|e| anyhow!("Failed to apply log level: {}", e))
    }
}
