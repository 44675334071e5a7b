use eframe::egui;
use egui::ColorImage;
use std::path::PathBuf;
use tracing::{error, info, warn};

use crate::core::{
    LabelOutcome, LabelSession, NavOutcome, OrganizeMode, TrashOutcome, UndoOutcome,
};
use crate::state::{ImageState, SessionConfig, UiState};
use crate::ui;

/// The egui application: one labeling session plus display-only state.
///
/// All domain logic lives in [`LabelSession`]; this struct maps its typed
/// outcomes onto status messages and keeps the current texture in sync.
pub struct ImageLabelerApp {
    pub session: LabelSession,
    pub image: ImageState,
    pub ui: UiState,
}

impl Default for ImageLabelerApp {
    fn default() -> Self {
        let config = SessionConfig::load();
        let session = LabelSession::new(config, SessionConfig::default_path());

        Self {
            session,
            image: ImageState::new(),
            ui: UiState::new(),
        }
    }
}

impl ImageLabelerApp {
    pub fn load_folder(&mut self, folder: PathBuf) {
        self.session.load_folder(folder);
        self.image.reset(true);
        let (labeled, total) = self.session.progress();
        self.ui.set_status(format!(
            "Found {} images, {} already labeled",
            total, labeled
        ));
    }

    pub fn set_label_file(&mut self, csv_path: PathBuf) {
        match self.session.set_label_file(csv_path) {
            Ok(()) => {
                self.image.reset(true);
                self.ui
                    .set_status(format!("Label file: {}", self.session.config().csv_file));
            }
            Err(e) => {
                error!("Failed to switch label file: {}", e);
                self.ui
                    .set_status(format!("Could not open label file: {}", e));
            }
        }
    }

    pub fn set_hide_labeled(&mut self, hide: bool) {
        self.session.set_hide_labeled(hide);
        self.image.reset(true);
    }

    pub fn save_label(&mut self, category: &str) {
        match self.session.save_label(category) {
            Ok(LabelOutcome::Labeled) => {
                self.image.reset(true);
                self.ui.set_status(format!("Saved: {}", category.trim()));
            }
            Ok(LabelOutcome::AllLabeled) => {
                self.image.reset(true);
                self.ui
                    .set_status("All images in this folder have been labeled!");
            }
            Ok(LabelOutcome::NothingToLabel) => {
                self.ui.set_status("Nothing to label");
            }
            Ok(LabelOutcome::EmptyCategory) => {
                self.ui.set_status("Empty category not allowed");
            }
            Err(e) => {
                error!("Failed to write label: {}", e);
                self.ui.set_status(format!("Could not save label: {}", e));
            }
        }
    }

    pub fn undo(&mut self) {
        match self.session.undo() {
            Ok(UndoOutcome::Restored { path, category }) => {
                self.image.reset(true);
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.ui
                    .set_status(format!("Removed label '{}' from {}", category, name));
            }
            Ok(UndoOutcome::NothingToUndo) => {
                self.ui.set_status("Nothing to undo!");
            }
            Err(e) => {
                error!("Undo failed: {}", e);
                self.ui.set_status(format!("Undo failed: {}", e));
            }
        }
    }

    pub fn move_to_trash(&mut self) {
        match self.session.move_to_trash() {
            TrashOutcome::Trashed(dest) => {
                self.image.reset(true);
                self.ui.set_status(format!("Moved to {}", dest.display()));
            }
            TrashOutcome::NothingToTrash => {
                self.ui.set_status("No image to trash");
            }
            TrashOutcome::Failed(reason) => {
                warn!("Trash failed: {}", reason);
                self.ui
                    .set_status(format!("Could not move to trash: {}", reason));
            }
        }
    }

    pub fn next_image(&mut self) {
        match self.session.next() {
            NavOutcome::Moved => self.image.reset(true),
            NavOutcome::EndOfList => self.ui.set_status("You have reached the last image"),
        }
    }

    pub fn prev_image(&mut self) {
        match self.session.prev() {
            NavOutcome::Moved => self.image.reset(true),
            NavOutcome::EndOfList => self.ui.set_status("Already at the first image"),
        }
    }

    pub fn organize(&mut self, dest_parent: PathBuf, mode: OrganizeMode) {
        match self.session.organize(&dest_parent, mode) {
            Ok(summary) => {
                info!(
                    "Organize finished: {} transferred, {} skipped, {} errors",
                    summary.transferred, summary.skipped, summary.errors
                );
                self.ui.organize_result = Some((summary, mode));
                self.image.reset(true);
            }
            Err(e) => {
                error!("Organize failed: {}", e);
                self.ui.set_status(format!("Organize failed: {}", e));
            }
        }
    }

    /// Decode the current image into a texture, applying the rotation. Called
    /// lazily by the central panel when no texture is loaded.
    pub fn load_current_image(&mut self, ctx: &egui::Context) {
        let Some(path) = self.session.current().cloned() else {
            return;
        };

        self.image.load_error = None;

        match image::open(&path) {
            Ok(img) => {
                let img = match self.image.rotation {
                    90 => img.rotate90(),
                    180 => img.rotate180(),
                    270 => img.rotate270(),
                    _ => img,
                };
                let rgba = img.to_rgba8();
                let size = [rgba.width() as _, rgba.height() as _];
                let pixels = rgba.as_flat_samples();

                let color_image = ColorImage::from_rgba_unmultiplied(size, pixels.as_slice());
                let texture =
                    ctx.load_texture("current_image", color_image, egui::TextureOptions::LINEAR);
                self.image.texture = Some(texture);
            }
            Err(e) => {
                warn!("Failed to load image {:?}: {}", path, e);
                self.image.load_error = Some(format!("Error loading image: {}", e));
            }
        }
    }
}

impl eframe::App for ImageLabelerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::render_top_panel(self, ctx);
        ui::render_bottom_panel(self, ctx);
        ui::render_category_panel(self, ctx);
        ui::render_central_panel(self, ctx);
        ui::render_organize_dialog(self, ctx);
        ui::render_status_toast(self, ctx);
        ui::handle_keyboard_shortcuts(self, ctx);
    }
}
