use std::sync::Once;

use env_logger::WriteStyle;
use log::LevelFilter;

/// Logger setup for the painter binaries and tests.
///
/// `filter` uses env_logger directive syntax, e.g.
/// `"warn,painter_lang=debug"`. Without it `RUST_LOG` applies, then `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub write_style: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: None, write_style: WriteStyle::Auto }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { filter: Some(filter.into()), ..Self::default() }
    }
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` backend.
///
/// Only the first call has any effect. If another logger is already
/// installed (a host process, a test harness) that one is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => builder.parse_filters(&filter),
            None => builder.filter_level(LevelFilter::Info),
        };

        builder.write_style(config.write_style).format_timestamp_millis();

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LoggingConfig::with_filter("debug"));
        init_logging(LoggingConfig::default());
        log::debug!("still logging");
    }
}
