//! HTML and terminal presentation of the core view model.
mod export;
mod html;
mod layout;
mod render;
mod terminal;

pub use export::{render_site, settled_view, site_routes};
pub use render::render_page;
pub use terminal::render_text;
