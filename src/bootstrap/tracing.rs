//! Tracing configuration for DriverHub
//!
//! Logs go to stderr so that command output on stdout stays machine-readable.
//!
//! ## Behavior / 行为
//!
//! - **Environment filter**: `RUST_LOG` wins; otherwise the configured filter
//! - **Format**: `2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message`

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Filter directives derived from the configured base level.
///
/// The workspace crates follow the base level; diesel's connection pool is
/// kept at `warn`.
fn build_filter_directives(base: &str) -> Vec<String> {
    let base = base.trim();
    let mut directives = vec![base.to_string()];
    if !base.contains('=') {
        directives.push(format!("dh_app={base}"));
        directives.push(format!("dh_infra={base}"));
        directives.push("r2d2=warn".to_string());
    }
    directives
}

/// Initialize the tracing subscriber.
///
/// ## Errors / 错误
///
/// Returns `Err` if a subscriber is already registered or the filter
/// directives do not parse.
pub fn init_tracing_subscriber(filter: &str) -> anyhow::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(build_filter_directives(filter).join(","))?,
    };

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}
