use crate::app::ImageLabelerApp;
use eframe::egui;

/// Handle keyboard shortcuts: arrows to navigate, Ctrl+Z to undo, Delete to
/// trash. Skipped while a text field has focus.
pub fn handle_keyboard_shortcuts(app: &mut ImageLabelerApp, ctx: &egui::Context) {
    if ctx.wants_keyboard_input() {
        return;
    }

    if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
        app.next_image();
    }
    if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
        app.prev_image();
    }
    if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Z)) {
        app.undo();
    }
    if ctx.input(|i| i.key_pressed(egui::Key::Delete)) {
        app.move_to_trash();
    }
}
