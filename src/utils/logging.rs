//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::{Builder, Env, Target};

/// Setup logging for the console. `RUST_LOG` overrides the `warn` default.
pub fn setup_logging() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .init();
}
