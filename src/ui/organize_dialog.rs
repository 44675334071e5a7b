use crate::app::ImageLabelerApp;
use crate::core::OrganizeMode;
use eframe::egui;
use egui_phosphor::regular as Icon;

/// Render the organize dialog: pick a destination, choose copy or move, and
/// show the summary of the last pass.
pub fn render_organize_dialog(app: &mut ImageLabelerApp, ctx: &egui::Context) {
    if !app.ui.show_organize_dialog {
        return;
    }

    let mut open = true;
    let mut requested_mode: Option<OrganizeMode> = None;

    egui::Window::new(format!("{} Organize Files", Icon::PACKAGE))
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(format!(
                "{} labeled images will be placed under labelled_images/<category>/ \
                 inside the folder you pick.",
                app.session.store().len()
            ));
            ui.add_space(5.0);
            ui.label(
                egui::RichText::new(
                    "Files already present at the destination are skipped, never overwritten.",
                )
                .weak()
                .small(),
            );
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui
                    .button(format!("{} Copy (keep originals)", Icon::COPY))
                    .clicked()
                {
                    requested_mode = Some(OrganizeMode::Copy);
                }
                if ui
                    .button(format!("{} Move (originals deleted)", Icon::ARROW_RIGHT))
                    .clicked()
                {
                    requested_mode = Some(OrganizeMode::Move);
                }
            });

            if let Some((summary, mode)) = &app.ui.organize_result {
                ui.add_space(10.0);
                ui.separator();
                ui.label(format!(
                    "{}: {} images. Skipped (already exists): {}. Errors: {}.",
                    mode.verb(),
                    summary.transferred,
                    summary.skipped,
                    summary.errors
                ));
            }
        });

    // The folder picker runs outside the window closure to keep the borrow simple.
    if let Some(mode) = requested_mode {
        if let Some(dest) = rfd::FileDialog::new()
            .set_title("Select parent directory for organized folders")
            .pick_folder()
        {
            app.organize(dest, mode);
        }
    }

    if !open {
        app.ui.show_organize_dialog = false;
        app.ui.organize_result = None;
    }
}
