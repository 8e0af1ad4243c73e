//! Entry point for the **kanata-sketchybar** bridge.
//!
//! Registers the SketchyBar events once, then runs the kanata connection
//! loop on the main thread until the process is killed.

use kanata_sketchybar::config::{usage, Config};
use kanata_sketchybar::connection::ConnectionManager;
use kanata_sketchybar::sketchybar::bar::{register_events, SketchyBar};
use log::error;

fn main() {
    env_logger::init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "kanata-sketchybar".into());

    let config = match Config::from_args(args) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", usage(&program));
            std::process::exit(1);
        }
    };

    let mut bar = SketchyBar::new(&config.sketchybar);
    register_events(&mut bar);

    ConnectionManager::new(config, bar).run()
}
