//! Command-line front end for the notebook authoring tools
//!
//! Two binaries share this library:
//! - `verify-notebook-fidelity <source> <notebook>`: the fidelity check
//! - `nbtool <command>`: fidelity check plus the notebook patch commands

pub mod commands;
pub mod verify;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing on stderr
///
/// Reports go to stdout, so diagnostics must stay off it. The default level
/// is `warn`; `verbose` raises it to `debug`. A non-empty `RUST_LOG`
/// replaces the default entirely.
pub fn init_tracing(verbose: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();

    // try_init: tests may install a subscriber more than once
    let _ = tracing_subscriber::registry()
        .with(log_filter(verbose, rust_log.as_deref()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let default = if verbose { "debug" } else { "warn" };
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}
