use log::{Level, LevelFilter, SetLoggerError};
use simplelog::{Color, ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Installs a `TermLogger` writing bare messages to stderr.
/// Fails if a logger is already set.
pub fn init_simple_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_level_color(Level::Debug, Some(Color::Cyan))
        .set_level_color(Level::Trace, Some(Color::Green))
        .build();

    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}
