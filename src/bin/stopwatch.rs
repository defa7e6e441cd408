use stopwatch::{gui::Gui, options::Options};

use anyhow::{Error, Result};
use clap::Parser;
use eframe::egui;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let options = Options::parse();

    info!(
        "Opening stopwatch, background: {:?}, maximized: {}",
        options.background,
        options.maximized()
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(Gui::TITLE)
            .with_inner_size([800.0, 600.0])
            .with_maximized(options.maximized()),
        ..Default::default()
    };

    eframe::run_native(
        Gui::TITLE,
        native_options,
        Box::new(move |cc| Box::new(Gui::new(cc, &options))),
    )
    .map_err(|e| Error::msg(format!("Failed to run stopwatch window: {}", e)))
}
