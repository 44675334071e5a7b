mod bottom;
mod category;
mod central;
mod top;

pub use bottom::render_bottom_panel;
pub use category::render_category_panel;
pub use central::render_central_panel;
pub use top::render_top_panel;
