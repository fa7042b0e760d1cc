use std::fs::File;

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger};

/// Terminal sink plus a debug-level `snake.log`. If the file cannot be
/// created we keep the terminal sink only; logging never takes the game
/// down.
pub fn init() {
    let mut sinks: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Info,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Ok(file) = File::create("snake.log") {
        sinks.push(WriteLogger::new(
            LevelFilter::Debug,
            simplelog::Config::default(),
            file,
        ));
    }
    let _ = CombinedLogger::init(sinks);
}
