//! Error Extension Tests

use std::io;
use wirebind_domain::error::{Error, Result};
use wirebind_infrastructure::error_ext::ErrorContext;

fn not_found() -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, "file not found")
}

#[test]
fn test_io_context() {
    let result: Result<()> = Err(not_found()).io_context("failed to read file");

    match result {
        Err(Error::Io { message, source }) => {
            assert!(message.contains("failed to read file"));
            assert!(message.contains("file not found"));
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context() {
    let result: Result<()> = Err(not_found()).config_context("bad config");
    assert!(matches!(result, Err(Error::Configuration { source: Some(_), .. })));
}

#[test]
fn test_success_passes_through() {
    let value: std::result::Result<u32, io::Error> = Ok(7);
    assert_eq!(value.io_context("unused").ok(), Some(7));
}

#[test]
fn test_generic_context_is_infrastructure() {
    let result: Result<()> = Err(not_found()).context("step failed");
    match result {
        Err(Error::Infrastructure { message, .. }) => assert!(message.starts_with("step failed")),
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}
