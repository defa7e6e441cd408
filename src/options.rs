use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(version = env!("CARGO_PKG_VERSION"), about = "Stopwatch with a fullscreen background")]
pub struct Options {
    /// Image stretched over the whole window
    pub background: Option<PathBuf>,

    /// Open a normal window instead of a maximized one
    #[arg(long, default_value_t = false)]
    pub windowed: bool,
}

impl Options {
    pub fn maximized(&self) -> bool {
        !self.windowed
    }
}
