use crate::app::ImageLabelerApp;
use eframe::egui;
use egui_phosphor::regular as Icon;

/// Render the bottom panel with navigation, undo and trash controls
pub fn render_bottom_panel(app: &mut ImageLabelerApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(10.0);

            let has_image = app.session.current().is_some();

            if ui
                .add_enabled(
                    has_image,
                    egui::Button::new(format!("{} Previous", Icon::ARROW_LEFT)),
                )
                .clicked()
            {
                app.prev_image();
            }

            if ui
                .add_enabled(
                    app.session.can_undo(),
                    egui::Button::new(format!("{} Undo", Icon::ARROW_U_UP_LEFT)),
                )
                .clicked()
            {
                app.undo();
            }

            if ui
                .add_enabled(
                    has_image,
                    egui::Button::new(format!("Skip / Next {}", Icon::ARROW_RIGHT)),
                )
                .clicked()
            {
                app.next_image();
            }

            ui.add_space(20.0);

            if ui
                .add_enabled(
                    has_image,
                    egui::Button::new(format!("{} Trash", Icon::TRASH))
                        .fill(egui::Color32::from_rgb(160, 50, 50)),
                )
                .clicked()
            {
                app.move_to_trash();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(path) = app.session.current() {
                    ui.label(format!("{} {}", Icon::FILE_IMAGE, path.display()));
                }
            });
        });
        ui.add_space(8.0);
    });
}
