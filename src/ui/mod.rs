pub mod keyboard;
pub mod organize_dialog;
pub mod panels;
pub mod toast;

// Re-export commonly used functions
pub use panels::{
    render_bottom_panel, render_category_panel, render_central_panel, render_top_panel,
};

pub use keyboard::handle_keyboard_shortcuts;
pub use organize_dialog::render_organize_dialog;
pub use toast::render_status_toast;
