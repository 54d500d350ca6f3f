use invp_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_init_returns_subscriber_error() {
    let _logger = Logger::builder()
        .name("init-twice")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    let err = Logger::builder()
        .name("init-twice-second")
        .level(LevelFilter::INFO)
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "expected subscriber error");
}

#[test]
fn no_outputs_is_invalid() {
    let err = Logger::builder()
        .name("silent")
        .console(false)
        .init()
        .expect_err("a logger without outputs is rejected");

    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
