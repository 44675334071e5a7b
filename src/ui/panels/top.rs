use crate::app::ImageLabelerApp;
use eframe::egui;
use egui_phosphor::regular as Icon;
use std::path::Path;

/// Render the top panel with folder/file controls and the progress readout
pub fn render_top_panel(app: &mut ImageLabelerApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(format!("{} Image Labeler", Icon::IMAGES));

            ui.add_space(20.0);

            if ui
                .button(format!("{} Open Folder", Icon::FOLDER_OPEN))
                .clicked()
            {
                if let Some(folder) = rfd::FileDialog::new().pick_folder() {
                    app.load_folder(folder);
                }
            }

            if ui
                .button(format!("{} Set Label File", Icon::FILE_CSV))
                .clicked()
            {
                if let Some(file) = rfd::FileDialog::new()
                    .add_filter("CSV files", &["csv"])
                    .save_file()
                {
                    app.set_label_file(file);
                }
            }

            let organize_enabled = !app.session.store().is_empty();
            if ui
                .add_enabled(
                    organize_enabled,
                    egui::Button::new(format!("{} Organize Files", Icon::PACKAGE)),
                )
                .clicked()
            {
                app.ui.show_organize_dialog = true;
            }

            ui.add_space(20.0);

            let mut hide_labeled = app.session.hide_labeled();
            if ui.checkbox(&mut hide_labeled, "Hide labeled").changed() {
                app.set_hide_labeled(hide_labeled);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (labeled, total) = app.session.progress();
                if total > 0 {
                    let fraction = labeled as f32 / total as f32;
                    ui.label(format!("{} / {}", labeled, total));
                    ui.add(
                        egui::ProgressBar::new(fraction)
                            .desired_width(120.0)
                            .show_percentage(),
                    );
                    ui.label("Progress:");
                }

                // Name of the active label file, as a reminder of where rows go.
                let csv_name = Path::new(&app.session.config().csv_file)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| app.session.config().csv_file.clone());
                ui.label(
                    egui::RichText::new(format!("{} {}", Icon::FILE_CSV, csv_name))
                        .weak()
                        .small(),
                );
            });
        });
    });
}
