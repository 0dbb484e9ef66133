//! Logging Tests

use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing::level_filters::LevelFilter;
use wirebind_infrastructure::constants::DEFAULT_LOG_LEVEL;
use wirebind_infrastructure::logging::{
    LoggingConfig, level_filter, log_config_source, parse_log_level,
};

/// Shared buffer a test subscriber writes into
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn logged(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
    assert!(parse_log_level(&config.level).is_ok());
}

#[test]
fn test_warning_alias_filters_at_warn() {
    let level = parse_log_level("warning").unwrap();
    let filter = level_filter(level);
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
}

#[test]
fn test_level_filter_follows_parsed_level() {
    for (name, expected) in [
        ("TRACE", LevelFilter::TRACE),
        ("debug", LevelFilter::DEBUG),
        ("Error", LevelFilter::ERROR),
    ] {
        let filter = level_filter(parse_log_level(name).unwrap());
        assert_eq!(filter.max_level_hint(), Some(expected), "level {name}");
    }
}

#[test]
fn test_config_source_reaches_installed_subscriber() {
    let output = logged(|| log_config_source(Some(Path::new("conf/wirebind.toml"))));
    assert!(output.contains("Configuration loaded from conf/wirebind.toml"));

    let output = logged(|| log_config_source(None));
    assert!(output.contains("No configuration file found"));
}
