//! Line diffs between reference and test output.
//!
//! - `engine` - edit scripts in inline and unified (hunk) form
//! - `render` - terminal text and HTML renderings of those edit scripts

mod engine;
mod render;

pub use engine::{DEFAULT_CONTEXT, Hunk, LineDiff, LineOp, OpTag, split_lines};
pub use render::{DiffStyle, render, render_html_inline, render_html_unified, render_terminal};
