mod formatter;
mod json;

pub use formatter::{render_text, should_use_colors};
pub use json::render_json;
