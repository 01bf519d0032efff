//! Global subscriber installation. Runs in its own process.

use lomake_log::{Config, Format, LogError, LoggerBuilder};

#[test]
fn install_once_then_refuse() {
    let config = Config {
        level: "debug".into(),
        format: Format::Json,
        ..Config::production()
    };
    let guard = lomake_log::init_with(config.clone()).expect("first install succeeds");
    assert_eq!(guard.config(), Some(&config));
    lomake_log::info!(answer = 42, "visible through the installed subscriber");

    let second = LoggerBuilder::from_config(Config::default()).build();
    assert!(matches!(second, Err(LogError::AlreadyInitialized(_))));

    let noop = lomake_log::auto_init().expect("auto_init tolerates an installed subscriber");
    assert!(noop.config().is_none());
}
