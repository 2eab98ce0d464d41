// Template merge engine.
// Pure and synchronous: (template, record) -> markup. No I/O, no shared mutable state.
// Every caller (preview, export, preset checks) goes through `render_template`.

mod blocks;
mod escape;
mod render;
mod tokens;

pub use escape::escape_html;
pub use render::{render_template, DEFAULT_PHOTO_SRC, LOADING_PLACEHOLDER};
