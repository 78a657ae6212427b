use showcase_domain::config::LogConfig;
use showcase_logger::{LevelFilter, Logger, LoggerError};
use std::str::FromStr;

/// Installs the global logger for binary `name` according to `config`.
///
/// The console layer is always on; `config.dir` adds daily-rotated files.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for an unknown level and propagates
/// any failure of [`showcase_logger::LoggerBuilder::init`].
pub fn init_logging(name: &str, config: &LogConfig) -> Result<Logger, LoggerError> {
    let level = parse_level(&config.level)?;
    let builder = Logger::builder().name(name).level(level);

    match &config.dir {
        Some(dir) => builder.directory(dir).init(),
        None => builder.init(),
    }
}

/// Parses `trace`, `debug`, `info`, `warn`, `error` or `off` (case-insensitive).
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for anything else.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Unknown log level '{level}': {e}").into(),
        context: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(parse_level("debug").ok(), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level(" WARN ").ok(), Some(LevelFilter::WARN));
        assert_eq!(parse_level("off").ok(), Some(LevelFilter::OFF));
    }

    #[test]
    fn unknown_level_is_rejected() {
        let err = parse_level("loud").expect_err("unknown level");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
