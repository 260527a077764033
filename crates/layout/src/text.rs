use crate::style::{Slant, Weight};
use std::fmt;

/// Everything a metrics provider needs to pick a font.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontKey {
    pub size: i32,
    pub weight: Weight,
    pub slant: Slant,
}

impl fmt::Display for FontKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.size)?;
        if self.weight == Weight::Bold {
            f.write_str(" bold")?;
        }
        if self.slant == Slant::Italic {
            f.write_str(" italic")?;
        }
        Ok(())
    }
}

/// A font could not be resolved for the requested key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontError {
    pub key: FontKey,
    pub reason: String,
}

impl FontError {
    pub fn new(key: FontKey, reason: impl Into<String>) -> Self {
        Self {
            key,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot resolve font {}: {}", self.key, self.reason)
    }
}

impl std::error::Error for FontError {}

/// Text measurement capability the layout engine calls into.
///
/// Layout never measures text itself; hosts plug in their font stack here (or use
/// [`crate::FixedMetrics`] when no real fonts are available).
pub trait TextMetrics {
    /// Handle returned by [`TextMetrics::resolve`] and stored in display items.
    type Font: Clone;

    fn resolve(&self, key: FontKey) -> Result<Self::Font, FontError>;

    /// Width of `text` in px when rendered with `font`.
    fn measure(&self, font: &Self::Font, text: &str) -> f32;

    /// Distance from the top of the font's em box to its baseline, in px.
    fn ascent(&self, font: &Self::Font) -> f32;

    /// Distance from the baseline to the bottom of the font's em box, in px.
    fn descent(&self, font: &Self::Font) -> f32;
}

impl<M: TextMetrics + ?Sized> TextMetrics for &M {
    type Font = M::Font;

    fn resolve(&self, key: FontKey) -> Result<Self::Font, FontError> {
        (**self).resolve(key)
    }

    fn measure(&self, font: &Self::Font, text: &str) -> f32 {
        (**self).measure(font, text)
    }

    fn ascent(&self, font: &Self::Font) -> f32 {
        (**self).ascent(font)
    }

    fn descent(&self, font: &Self::Font) -> f32 {
        (**self).descent(font)
    }
}
