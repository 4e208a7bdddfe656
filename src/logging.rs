//! Console logging for the command line tool
//!
//! The library only emits records through the `log` facade. The binary calls
//! [`init`] once to route them to stderr, keeping stdout free for key and
//! signature output.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

/// Environment variable holding the log level
pub const LOG_LEVEL_ENV: &str = "BIRDOL_LOG";

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {t} - {m}{n}";

/// Parse `error|warn|info|debug|trace|off`, ignoring case
pub fn parse_level(text: &str) -> Option<LevelFilter> {
    match text.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Effective level: `-v` flags win, then the environment, then `warn`
pub fn resolve_level(verbosity: u8, env_value: Option<&str>) -> LevelFilter {
    match verbosity {
        0 => env_value.and_then(parse_level).unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install a stderr console logger
///
/// # Errors
/// Returns an error if the configuration is rejected or a logger is already set.
pub fn init(verbosity: u8) -> Result<(), Box<dyn std::error::Error>> {
    let env_value = std::env::var(LOG_LEVEL_ENV).ok();
    let level = resolve_level(verbosity, env_value.as_deref());

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" warn "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn test_resolve_level() {
        assert_eq!(resolve_level(0, None), LevelFilter::Warn);
        assert_eq!(resolve_level(0, Some("info")), LevelFilter::Info);
        assert_eq!(resolve_level(0, Some("bogus")), LevelFilter::Warn);
        assert_eq!(resolve_level(1, Some("error")), LevelFilter::Info);
        assert_eq!(resolve_level(2, None), LevelFilter::Debug);
        assert_eq!(resolve_level(5, None), LevelFilter::Trace);
    }
}
