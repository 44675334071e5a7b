use crate::app::ImageLabelerApp;
use eframe::egui;
use egui_phosphor::regular as Icon;

/// Render the right side panel with one button per category and a free-text
/// entry for adding a new one.
pub fn render_category_panel(app: &mut ImageLabelerApp, ctx: &egui::Context) {
    egui::SidePanel::right("category_panel")
        .default_width(220.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new("CATEGORIES")
                    .strong()
                    .color(egui::Color32::GRAY),
            );
            ui.add_space(5.0);
            ui.separator();
            ui.add_space(5.0);

            let labeling_enabled = app.session.current().is_some();

            // Clicking a button may extend the category list, so iterate a copy.
            let categories = app.session.config().categories.clone();
            let mut picked: Option<String> = None;

            egui::ScrollArea::vertical().show(ui, |ui| {
                for category in &categories {
                    let button =
                        egui::Button::new(category.as_str()).min_size(egui::vec2(180.0, 32.0));
                    if ui.add_enabled(labeling_enabled, button).clicked() {
                        picked = Some(category.clone());
                    }
                    ui.add_space(4.0);
                }
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut app.ui.custom_category)
                        .hint_text("New category...")
                        .desired_width(130.0),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                if ui.button(format!("{} Add", Icon::PLUS)).clicked() || submitted {
                    picked = Some(app.ui.custom_category.clone());
                    app.ui.custom_category.clear();
                }
            });

            if let Some(category) = picked {
                app.save_label(&category);
            }
        });
}
