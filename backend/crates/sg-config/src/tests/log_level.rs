use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn test_log_level_parses_known_names_case_insensitively() {
    let cases = [
        ("off", LevelFilter::Off),
        ("ERROR", LevelFilter::Error),
        ("Warn", LevelFilter::Warn),
        ("info", LevelFilter::Info),
        ("debug", LevelFilter::Debug),
        (" trace ", LevelFilter::Trace),
    ];

    for (raw, expected) in cases {
        assert_eq!(LogLevel::from_str(raw), Ok(LogLevel(expected)), "{raw:?}");
    }
}

#[test]
fn test_log_level_defaults_to_info_for_unknown_names() {
    assert_eq!(LogLevel::from_str("verbose"), Ok(LogLevel(LevelFilter::Info)));
}

#[test]
fn test_log_level_converts_into_level_filter() {
    let filter: LevelFilter = LogLevel(LevelFilter::Warn).into();

    assert_eq!(filter, LevelFilter::Warn);
}
