#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use bead_painter::{PainterApp, PainterConfig};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = PainterConfig::default();
    let side = config.canvas_size().unwrap_or_default() as f32;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Aqua Bead Painter")
            .with_inner_size([side + 16.0, side + 80.0])
            .with_min_inner_size([side + 16.0, side + 80.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Aqua Bead Painter",
        native_options,
        Box::new(|cc| Ok(Box::new(PainterApp::new(cc, config)))),
    )
}
