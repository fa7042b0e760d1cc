use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::display::{LCD_HEIGHT, LCD_WIDTH};

/// Settings read from an optional `snake.json` next to the binary. Defaults
/// fill the 84x48 display exactly.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub grid_width: u32,
    pub grid_height: u32,
    /// Cell size in pixels.
    pub weight: u32,
    pub tick_ms: u64,
    /// Window upscale factor for the desktop simulation.
    pub window_scale: u32,
    /// Fixed RNG seed; omit for a different game every run.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_width: 14,
            grid_height: 8,
            weight: 6,
            tick_ms: 150,
            window_scale: 8,
            seed: None,
        }
    }
}

impl Config {
    /// The grid must fit the display and leave room for the starting snake
    /// plus a food cell.
    pub fn is_valid(&self) -> bool {
        self.grid_width >= 4
            && self.grid_height >= 2
            && self.weight > 0
            && self.tick_ms > 0
            && self.window_scale > 0
            && self.grid_width * self.weight <= LCD_WIDTH as u32
            && self.grid_height * self.weight <= LCD_HEIGHT as u32
    }
}

pub fn load(path: &str) -> Option<Config> {
    if !Path::new(path).exists() {
        return None;
    }
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Missing file is fine (defaults); an unreadable or out-of-range file is
/// worth a warning before falling back.
pub fn load_or_default(path: &str) -> Config {
    if !Path::new(path).exists() {
        return Config::default();
    }
    match load(path) {
        Some(cfg) if cfg.is_valid() => cfg,
        Some(_) => {
            warn!("{path} has out-of-range settings, using defaults");
            Config::default()
        }
        None => {
            warn!("could not parse {path}, using defaults");
            Config::default()
        }
    }
}
