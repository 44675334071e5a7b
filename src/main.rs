use eframe::egui;
use tracing::info;

mod app;
mod core;
mod logging;
mod state;
mod ui;

use app::ImageLabelerApp;

fn main() -> Result<(), eframe::Error> {
    logging::setup_logging();

    info!("Starting Image Labeler");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_title("Image Labeler"),
        ..Default::default()
    };

    eframe::run_native(
        "Image Labeler",
        options,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(ImageLabelerApp::default()))
        }),
    )
}
