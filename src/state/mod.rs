mod app_state;
mod settings;

pub use app_state::{ImageState, StatusMessage, UiState};
pub use settings::SessionConfig;
