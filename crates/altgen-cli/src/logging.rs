//! Tracing setup for the CLI.
//!
//! The subscriber is only installed when `-v` is passed or `ALT_LOG` /
//! `RUST_LOG` is set, and always writes to stderr.
//!
//! ```bash
//! ALT_LOG=altgen=trace alt page.tmpl page.cpp
//! ```

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn build_filter(verbose: bool) -> Option<EnvFilter> {
    if verbose {
        return Some(EnvFilter::new("debug"));
    }
    if let Ok(val) = std::env::var("ALT_LOG") {
        return Some(EnvFilter::builder().parse_lossy(val));
    }
    if std::env::var("RUST_LOG").is_ok() {
        return Some(EnvFilter::from_default_env());
    }
    None
}

/// Installs the global subscriber if logging was requested.
pub fn init_tracing(verbose: bool) {
    let Some(filter) = build_filter(verbose) else {
        return;
    };
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}
