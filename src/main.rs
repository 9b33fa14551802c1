//! The Fourth Protocol GUI
//!
//! Play against another person or the minimax AI.

use std::path::Path;

use fourth::config::CONFIG_FILE;
use fourth::ui::FourthApp;
use fourth::GameConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GameConfig::load_or_default(Path::new(CONFIG_FILE))?;
    tracing::info!(difficulty = %config.difficulty, size = config.grid_size(), "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("The Fourth Protocol"),
        ..Default::default()
    };

    eframe::run_native(
        "The Fourth Protocol",
        options,
        Box::new(|cc| Ok(Box::new(FourthApp::new(cc, config)))),
    )?;
    Ok(())
}
