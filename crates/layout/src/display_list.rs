/// One positioned run of text. `y` is the top of the run's em box.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayItem<F> {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font: F,
}

/// Output of one layout pass, in reading order.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayList<F> {
    items: Vec<DisplayItem<F>>,
    content_height: f32,
}

impl<F> DisplayList<F> {
    pub(crate) fn new(items: Vec<DisplayItem<F>>, content_height: f32) -> Self {
        Self {
            items,
            content_height,
        }
    }

    pub fn items(&self) -> &[DisplayItem<F>] {
        &self.items
    }

    pub fn into_items(self) -> Vec<DisplayItem<F>> {
        self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DisplayItem<F>> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Final y of the layout cursor, i.e. the bottom of the laid-out content.
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Items overlapping the viewport `[scroll, scroll + viewport_height]`, treating each
    /// item as `line_height` tall. Renderers draw these at `y - scroll`.
    pub fn visible(
        &self,
        scroll: f32,
        viewport_height: f32,
        line_height: f32,
    ) -> impl Iterator<Item = &DisplayItem<F>> {
        self.items.iter().filter(move |item| {
            item.y <= scroll + viewport_height && item.y + line_height >= scroll
        })
    }
}

impl<'a, F> IntoIterator for &'a DisplayList<F> {
    type Item = &'a DisplayItem<F>;
    type IntoIter = std::slice::Iter<'a, DisplayItem<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
