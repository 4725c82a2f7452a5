//! Logger setup shared by Tourney binaries.

use std::fmt;

use tracing_subscriber::{
    EnvFilter,
    fmt::{format::Writer, time::FormatTime},
};

use crate::time::now_jst_rfc3339;

/// Timer that stamps each log line with the current JST time.
#[derive(Debug, Clone, Copy, Default)]
pub struct JstTimer;

impl FormatTime for JstTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", now_jst_rfc3339())
    }
}

/// Build the default filter directive for a binary.
///
/// The binary's own crate and this workspace's crates log at `default_level`,
/// `tower_http` logs at `debug` so request traces are visible.
fn default_directive(bin_name: &str, default_level: &str) -> String {
    let crate_name = bin_name.replace('-', "_");
    format!(
        "{crate_name}={default_level},tourney_server={default_level},tourney_shared={default_level},tower_http=debug,info"
    )
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the built-in directive.
/// Calling this twice is harmless: the second call is ignored.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(bin_name, default_level)));

    let initialized = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(JstTimer)
        .with_target(true)
        .try_init();

    if initialized.is_ok() {
        tracing::debug!("Logger initialized for {}", bin_name);
    }
}
