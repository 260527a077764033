/// Width of the content area in px.
pub const WIDTH: f32 = 800.0;
/// Height of the viewport in px.
pub const HEIGHT: f32 = 600.0;
/// Left margin and starting x of every line.
pub const HSTEP: f32 = 13.0;
/// Top margin and paragraph spacing.
pub const VSTEP: f32 = 18.0;
/// Line leading multiplier applied to the tallest ascent/descent of a line.
pub const LEADING: f32 = 1.25;
pub const DEFAULT_FONT_SIZE: i32 = 16;
pub const SMALL_DELTA: i32 = 2;
pub const BIG_DELTA: i32 = 4;

/// Per-call configuration for the layout engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    pub width: f32,
    pub height: f32,
    pub hstep: f32,
    pub vstep: f32,
    pub leading: f32,
    pub default_size: i32,
    pub small_delta: i32,
    pub big_delta: i32,
}

impl LayoutOptions {
    pub fn defaults() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            hstep: HSTEP,
            vstep: VSTEP,
            leading: LEADING,
            default_size: DEFAULT_FONT_SIZE,
            small_delta: SMALL_DELTA,
            big_delta: BIG_DELTA,
        }
    }

    pub fn with_width(self, width: f32) -> Self {
        Self { width, ..self }
    }

    /// Right edge a word may not reach without wrapping.
    pub fn content_right(&self) -> f32 {
        self.width - self.hstep
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::defaults()
    }
}
