use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "NUMERIC_INTEROP_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

static INITIALISED: OnceLock<()> = OnceLock::new();

// directive, then NUMERIC_INTEROP_LOG, then RUST_LOG, then warn
pub fn resolve_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_from_env(LOG_ENV).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global stderr subscriber.
///
/// Returns `false` when this library already installed one, or when the host
/// process installed its own global subscriber first.
pub fn init_logging(directive: Option<&str>) -> bool {
    let mut installed = false;
    INITIALISED.get_or_init(|| {
        let use_ansi = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
        let subscriber = fmt::fmt()
            .with_env_filter(resolve_filter(directive))
            .with_ansi(use_ansi)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .compact()
            .finish();
        installed = tracing::subscriber::set_global_default(subscriber).is_ok();
    });
    if installed {
        tracing::debug!(version = env!("CARGO_PKG_VERSION"), "numeric_interop logging initialised");
    }
    installed
}
