use std::cell::RefCell;
use std::collections::HashMap;

use crate::text::{FontError, FontKey, TextMetrics};

/// Memoises [`TextMetrics::resolve`] per [`FontKey`].
///
/// Failed lookups are not cached. `RefCell` makes this `!Sync`; keep one cache per thread.
pub struct FontCache<M: TextMetrics> {
    inner: M,
    fonts: RefCell<HashMap<FontKey, M::Font>>,
}

impl<M: TextMetrics> FontCache<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            fonts: RefCell::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Number of distinct fonts resolved so far.
    pub fn len(&self) -> usize {
        self.fonts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.fonts.borrow_mut().clear();
    }
}

impl<M: TextMetrics> TextMetrics for FontCache<M> {
    type Font = M::Font;

    fn resolve(&self, key: FontKey) -> Result<Self::Font, FontError> {
        if let Some(font) = self.fonts.borrow().get(&key) {
            return Ok(font.clone());
        }
        let font = self.inner.resolve(key)?;
        log::trace!(target: "layout", "caching font {key}");
        self.fonts.borrow_mut().insert(key, font.clone());
        Ok(font)
    }

    fn measure(&self, font: &Self::Font, text: &str) -> f32 {
        self.inner.measure(font, text)
    }

    fn ascent(&self, font: &Self::Font) -> f32 {
        self.inner.ascent(font)
    }

    fn descent(&self, font: &Self::Font) -> f32 {
        self.inner.descent(font)
    }
}
