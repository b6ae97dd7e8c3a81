// main.rs - Game of Life desktop front-end

use eframe::egui;
use log::info;

mod app;

use app::LifeApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("starting Game of Life");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([820.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::default())),
    )
}
