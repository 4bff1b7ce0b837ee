//! Diagnostic logging through `tracing`.
//!
//! Output goes to stderr. `RUST_LOG` wins when set; otherwise the level
//! follows the number of `-v` flags:
//!
//! - none: `crewroster=warn`
//! - `-v`: `crewroster=info`
//! - `-vv` or more: `crewroster=debug`

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "crewroster=warn",
        1 => "crewroster=info",
        _ => "crewroster=debug",
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true)
                .with_file(false),
        )
        .try_init();
}
