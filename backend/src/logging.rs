use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Installs the terminal logger. Calling it twice is harmless, the second
/// attempt is reported and ignored.
pub fn init_logging(level: LevelFilter) {
    let config = ConfigBuilder::default()
        .set_time_level(LevelFilter::Trace)
        .build();
    if let Err(e) = TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto) {
        log::warn!("logger already initialized: {e}");
        return;
    }
    log::debug!("logging initialized at {level}");
}
