use egui::TextureHandle;
use std::time::Instant;

use crate::core::{OrganizeMode, OrganizeSummary};

/// Display state for the image currently on screen.
#[derive(Default)]
pub struct ImageState {
    /// Texture for the current image, loaded lazily by the central panel.
    pub texture: Option<TextureHandle>,
    /// Rotation applied at decode time, in degrees (0, 90, 180, 270).
    pub rotation: u16,
    /// Error message if the image failed to decode.
    pub load_error: Option<String>,
}

impl ImageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the texture (and optionally the rotation) so the next frame
    /// reloads the current image.
    pub fn reset(&mut self, reset_rotation: bool) {
        self.texture = None;
        self.load_error = None;
        if reset_rotation {
            self.rotation = 0;
        }
    }

    /// Rotate in 90-degree steps; positive is clockwise.
    pub fn rotate(&mut self, steps: i16) {
        let quarter_turns = (self.rotation / 90) as i16;
        self.rotation = ((quarter_turns + steps).rem_euclid(4) * 90) as u16;
        self.texture = None;
    }
}

/// A transient message shown in the status toast.
pub struct StatusMessage {
    pub text: String,
    pub shown_at: Instant,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown_at: Instant::now(),
        }
    }
}

/// UI-side state: dialog visibility and user input buffers.
#[derive(Default)]
pub struct UiState {
    /// Free-text entry for a new category.
    pub custom_category: String,
    /// Whether the organize dialog is open.
    pub show_organize_dialog: bool,
    /// Summary of the last organize pass, shown in the dialog.
    pub organize_result: Option<(OrganizeSummary, OrganizeMode)>,
    /// Transient outcome message.
    pub status: Option<StatusMessage>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::new(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps_in_quarter_turns() {
        let mut image = ImageState::new();
        image.rotate(1);
        assert_eq!(image.rotation, 90);
        image.rotate(-2);
        assert_eq!(image.rotation, 270);
        image.rotate(1);
        assert_eq!(image.rotation, 0);
    }
}
