// SPDX-License-Identifier: MPL-2.0
//! Logging setup.
//!
//! Log records go through the `log` facade and are written to stderr by
//! `env_logger`. The filter is read from `COMET_PLANNER_LOG` using the usual
//! `env_logger` directive syntax (e.g. `debug`, `comet_planner=trace`).

use env_logger::{fmt::TimestampPrecision, Builder, Target};
use log::LevelFilter;

/// Environment variable holding the log filter directives.
pub const ENV_LOG_FILTER: &str = "COMET_PLANNER_LOG";

/// Initializes the global logger.
///
/// Safe to call more than once; only the first call installs a logger.
pub fn init() {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module("comet_planner", LevelFilter::Info)
        .format_timestamp(Some(TimestampPrecision::Millis))
        .target(Target::Stderr);

    if let Ok(directives) = std::env::var(ENV_LOG_FILTER) {
        builder.parse_filters(&directives);
    }

    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        log::info!("logger initialized twice without panicking");
    }
}
