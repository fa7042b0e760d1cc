use log::info;

use snake_5110::{config, event_loop, logger};

fn main() {
    logger::init();

    let cfg = config::load_or_default("snake.json");
    info!(
        "starting: {}x{} cells at weight {}, tick {} ms",
        cfg.grid_width, cfg.grid_height, cfg.weight, cfg.tick_ms
    );

    event_loop::run(cfg);
}
