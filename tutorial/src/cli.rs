use argh::FromArgs;
use backend::config::WindowConfig;
use log::LevelFilter;

/// Options shared by the tutorial programs
#[derive(Debug, Clone, FromArgs)]
pub struct CLIOptions {
    /// verbose level: off, error, warn, info, debug, trace
    #[argh(option)]
    pub verbose: Option<LevelFilter>,
    /// window width in pixels
    #[argh(option, default = "0")]
    pub width: u32,
    /// window height in pixels
    #[argh(option, default = "0")]
    pub height: u32,
    /// window title
    #[argh(option)]
    pub title: Option<String>,
}

impl CLIOptions {
    pub fn log_level(&self) -> LevelFilter {
        self.verbose.unwrap_or(LevelFilter::Info)
    }

    /// Overrides `base` with whatever was given on the command line.
    /// Zero width/height mean "keep the default".
    pub fn apply_to(&self, mut base: WindowConfig) -> WindowConfig {
        if self.width != 0 {
            base.width = self.width;
        }
        if self.height != 0 {
            base.height = self.height;
        }
        if let Some(title) = &self.title {
            title.clone_into(&mut base.title);
        }
        base
    }
}
