//! Inline text layout: turns a parsed [`html::Document`] into a display list of positioned,
//! styled words.
mod display_list;
mod engine;
mod fixed;
mod font_cache;
mod options;
mod style;
mod text;

#[cfg(test)]
mod tests;

pub use display_list::{DisplayItem, DisplayList};
pub use engine::{layout, layout_with_defaults};
pub use fixed::{FixedFont, FixedMetrics};
pub use font_cache::FontCache;
pub use options::{
    BIG_DELTA, DEFAULT_FONT_SIZE, HEIGHT, HSTEP, LEADING, LayoutOptions, SMALL_DELTA, VSTEP, WIDTH,
};
pub use style::{Slant, Style, Weight};
pub use text::{FontError, FontKey, TextMetrics};
