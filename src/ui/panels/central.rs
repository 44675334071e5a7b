use crate::app::ImageLabelerApp;
use eframe::egui;
use egui_phosphor::regular as Icon;

/// Render the central panel with the current image and rotation controls
pub fn render_central_panel(app: &mut ImageLabelerApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if app.session.catalog().is_empty() {
            ui.centered_and_justified(|ui| {
                ui.heading("No images found. Click 'Open Folder' to begin.");
            });
            return;
        }

        // Catalog has files but the filtered view is exhausted.
        if app.session.current().is_none() {
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("All images labeled!");
                    ui.label("Great job! Use 'Organize Files' to move them by category.");
                });
            });
            return;
        }

        // Header: filename, position in the view, current label, rotation.
        ui.horizontal(|ui| {
            let path = app.session.current().cloned();
            if let Some(path) = &path {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                ui.heading(name);

                let status = app
                    .session
                    .store()
                    .get(path.to_string_lossy().as_ref())
                    .unwrap_or("Unlabeled")
                    .to_string();
                ui.label(
                    egui::RichText::new(format!(
                        "{}  •  {} of {}",
                        status,
                        app.session.current_index() + 1,
                        app.session.view().len()
                    ))
                    .weak(),
                );
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(Icon::ARROW_CLOCKWISE.to_string())
                    .on_hover_text("Rotate right")
                    .clicked()
                {
                    app.image.rotate(1);
                }
                if ui
                    .button(Icon::ARROW_COUNTER_CLOCKWISE.to_string())
                    .on_hover_text("Rotate left")
                    .clicked()
                {
                    app.image.rotate(-1);
                }
            });
        });
        ui.separator();

        if app.image.texture.is_none() && app.image.load_error.is_none() {
            app.load_current_image(ctx);
        }

        if let Some(error) = &app.image.load_error {
            ui.centered_and_justified(|ui| {
                ui.colored_label(egui::Color32::LIGHT_RED, error);
            });
            return;
        }

        if let Some(texture) = &app.image.texture {
            let available = ui.available_size();
            let img_size = texture.size_vec2();
            // Fit within the panel, never upscale.
            let scale = (available.x / img_size.x)
                .min(available.y / img_size.y)
                .min(1.0);
            let scaled = img_size * scale;

            ui.centered_and_justified(|ui| {
                ui.add(egui::Image::new((texture.id(), scaled)));
            });
        }
    });
}
