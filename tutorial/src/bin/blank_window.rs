use backend::config::WindowConfig;
use backend::logging::init_logging;
use backend::system::System;
use log::{error, info};
use tutorial::cli::CLIOptions;

fn main() {
    let options: CLIOptions = argh::from_env();
    init_logging(options.log_level());

    let config = options.apply_to(WindowConfig::default().with_title("Blank Window"));
    let mut system = match System::new(config) {
        Ok(s) => s,
        Err(e) => {
            error!("{e:?}");
            println!("{e}");
            std::process::exit(-1);
        }
    };

    info!("Entering frame loop");
    while !system.should_close() {
        system.process_io_events();
        system.clear_screen();
        system.draw_to_screen();
    }
    info!("Window closed");
}
