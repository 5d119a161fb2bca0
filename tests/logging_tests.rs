#![cfg(feature = "std")]

use entropy_battleship::{init_logging, parse_level};
use log::LevelFilter;

#[test]
fn test_level_parsing() {
    assert_eq!(parse_level(None), LevelFilter::Info);
    assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
    assert_eq!(parse_level(Some("TRACE")), LevelFilter::Trace);
    assert_eq!(parse_level(Some("off")), LevelFilter::Off);
    assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
}

#[test]
fn test_init_twice_is_harmless() {
    init_logging();
    init_logging();
    log::info!("logger installed");
}
