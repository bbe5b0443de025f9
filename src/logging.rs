use std::{io, sync::Once};

use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Installs the stderr tracing subscriber once per process.
///
/// `RUST_LOG` overrides the default `perfrun=warn` filter.
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("perfrun=warn"));

        fmt()
            .with_env_filter(env_filter)
            .with_writer(io::stderr)
            .with_target(false)
            .compact()
            .init();
    });
}
