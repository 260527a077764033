use crate::text::{FontError, FontKey, TextMetrics};

const ASCENT_RATIO: f32 = 0.8;
const DEFAULT_ADVANCE_RATIO: f32 = 0.6;

/// Deterministic metrics for headless layout: every char advances by
/// `size * advance_ratio`, ascent and descent split the em box 80/20.
#[derive(Clone, Copy, Debug)]
pub struct FixedMetrics {
    advance_ratio: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedFont {
    pub key: FontKey,
    pub px: f32,
}

impl FixedMetrics {
    pub fn new() -> Self {
        Self::with_advance_ratio(DEFAULT_ADVANCE_RATIO)
    }

    pub fn with_advance_ratio(advance_ratio: f32) -> Self {
        Self { advance_ratio }
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMetrics for FixedMetrics {
    type Font = FixedFont;

    fn resolve(&self, key: FontKey) -> Result<FixedFont, FontError> {
        if key.size <= 0 {
            return Err(FontError::new(key, "font size must be positive"));
        }
        Ok(FixedFont {
            key,
            px: key.size as f32,
        })
    }

    fn measure(&self, font: &FixedFont, text: &str) -> f32 {
        text.chars().count() as f32 * font.px * self.advance_ratio
    }

    fn ascent(&self, font: &FixedFont) -> f32 {
        font.px * ASCENT_RATIO
    }

    fn descent(&self, font: &FixedFont) -> f32 {
        font.px * (1.0 - ASCENT_RATIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    #[test]
    fn measures_by_char_count() {
        let metrics = FixedMetrics::with_advance_ratio(0.5);
        let font = metrics.resolve(Style::new(20).font_key()).unwrap();
        assert_eq!(metrics.measure(&font, "caf\u{e9}"), 40.0);
        assert_eq!(metrics.measure(&font, ""), 0.0);
        assert_eq!(metrics.ascent(&font), 16.0);
        assert!((metrics.descent(&font) - 4.0).abs() < 1e-4);
    }

    #[test]
    fn rejects_non_positive_sizes() {
        let metrics = FixedMetrics::default();
        let err = metrics.resolve(Style::new(-2).font_key()).unwrap_err();
        assert_eq!(err.key.size, -2);
        assert_eq!(
            err.to_string(),
            "cannot resolve font -2px: font size must be positive"
        );
    }
}
