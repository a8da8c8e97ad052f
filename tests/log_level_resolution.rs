use execplan::cli::LogLevel;
use execplan::logging::resolve_level;
use tracing::Level;

#[test]
fn cli_flag_takes_priority_over_environment() {
    assert_eq!(
        resolve_level(Some(LogLevel::Debug), Some("error")),
        Level::DEBUG
    );
}

#[test]
fn environment_value_is_parsed_leniently() {
    assert_eq!(resolve_level(None, Some("WARN")), Level::WARN);
    assert_eq!(resolve_level(None, Some(" trace ")), Level::TRACE);
}

#[test]
fn absent_or_unparseable_environment_defaults_to_info() {
    assert_eq!(resolve_level(None, None), Level::INFO);
    assert_eq!(resolve_level(None, Some("noisy")), Level::INFO);
}
