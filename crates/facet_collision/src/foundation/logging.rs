//! Logging setup for binaries built on the crate
//!
//! The library itself only emits through the `log` macros.

/// Initialize logging at `level`; per-module directives in `RUST_LOG` still apply
pub fn init_with_level(level: log::LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
