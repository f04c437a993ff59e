//! Logger setup for the `pagesim` binary and tests.
//!
//! Library code only uses the `log` macros; installing a backend is left to
//! the caller. `RUST_LOG` overrides the defaults below, e.g.
//! `RUST_LOG=pagesim::replacer=trace` prints every access.

use std::io::Write;

fn format_record(
    buf: &mut env_logger::fmt::Formatter,
    record: &log::Record<'_>,
) -> std::io::Result<()> {
    writeln!(
        buf,
        "{} [{}] - {}:{} - {}",
        record.level(),
        record.target(),
        record.file().unwrap_or("<unknown>"),
        record.line().unwrap_or(0),
        record.args()
    )
}

pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Warn) // Default to warnings and errors
        .parse_default_env()
        .format(format_record)
        .try_init();
}

/// Verbose logger for unit and integration tests; output is captured per test.
pub fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Info)
        .filter_module("pagesim::replacer", log::LevelFilter::Trace)
        .filter_module("pagesim::sim", log::LevelFilter::Debug)
        .format(format_record)
        .try_init();
}
