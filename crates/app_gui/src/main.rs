mod app;
mod config;
mod i18n;

use app::UiApp;
use config::AppSettings;
use eframe::{NativeOptions, egui};

fn main() {
    tracing_subscriber::fmt::init();
    let settings = AppSettings::load_or_default();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Wardrobe")
            .with_inner_size([1200.0, 800.0])
            .with_drag_and_drop(true),
        ..NativeOptions::default()
    };
    if let Err(e) = eframe::run_native(
        "Wardrobe",
        options,
        Box::new(|_cc| Ok(Box::new(UiApp::new(settings)))),
    ) {
        eprintln!("Application stopped with error: {e}");
    }
}
