//! wavescope - terminal waveform workbench
//!
//! Run with: cargo run

mod app;
mod ui;

use app::App;
use wavescope::config::{Config, CONFIG_FILENAME};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = Config::load(CONFIG_FILENAME);
    let mut app = App::new(config);

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}
