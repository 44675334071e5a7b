use crate::app::ImageLabelerApp;
use eframe::egui;
use std::time::Duration;

const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Render the transient status toast in the bottom-left corner.
pub fn render_status_toast(app: &mut ImageLabelerApp, ctx: &egui::Context) {
    let Some(status) = &app.ui.status else {
        return;
    };

    let elapsed = status.shown_at.elapsed();
    if elapsed >= TOAST_DURATION {
        app.ui.status = None;
        return;
    }

    egui::Window::new("status_toast")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .fixed_pos(egui::pos2(20.0, ctx.screen_rect().height() - 80.0))
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(egui::Color32::from_rgb(45, 45, 48))
                .stroke(egui::Stroke::new(
                    1.0,
                    egui::Color32::from_rgb(100, 100, 100),
                ))
                .rounding(6.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(&status.text).color(egui::Color32::WHITE));
                });
        });

    // Wake up again so the toast disappears without user input.
    ctx.request_repaint_after(TOAST_DURATION - elapsed);
}
