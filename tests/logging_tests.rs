use battleship_rules::{init_logging, level_from};
use log::LevelFilter;

#[test]
fn level_parsing_falls_back_to_info() {
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some("WARN")), LevelFilter::Warn);
    assert_eq!(level_from(Some("loud")), LevelFilter::Info);
    assert_eq!(level_from(None), LevelFilter::Info);
}

#[test]
fn init_logging_is_repeatable() {
    init_logging();
    init_logging();
    log::info!("logger installed");
}
