use crate::options::LayoutOptions;
use crate::text::FontKey;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Weight {
    #[default]
    Normal,
    Bold,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Slant {
    #[default]
    Roman,
    Italic,
}

/// Inline style state carried through a layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    pub size: i32,
    pub weight: Weight,
    pub slant: Slant,
}

impl Style {
    pub fn new(size: i32) -> Self {
        Self {
            size,
            weight: Weight::Normal,
            slant: Slant::Roman,
        }
    }

    pub fn font_key(self) -> FontKey {
        FontKey {
            size: self.size,
            weight: self.weight,
            slant: self.slant,
        }
    }

    /// Applies the style effect of entering `tag`. Unknown tags are no-ops.
    pub fn open(&mut self, tag: &str, options: &LayoutOptions) {
        match tag {
            "i" => self.slant = Slant::Italic,
            "b" => self.weight = Weight::Bold,
            "small" => self.size -= options.small_delta,
            "big" => self.size += options.big_delta,
            _ => {}
        }
    }

    /// Applies the style effect of leaving `tag`.
    ///
    /// `i` and `b` reset to roman/normal rather than restoring an outer value.
    pub fn close(&mut self, tag: &str, options: &LayoutOptions) {
        match tag {
            "i" => self.slant = Slant::Roman,
            "b" => self.weight = Weight::Normal,
            "small" => self.size += options.small_delta,
            "big" => self.size -= options.big_delta,
            _ => {}
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(crate::options::DEFAULT_FONT_SIZE)
    }
}
