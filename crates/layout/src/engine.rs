use html::{Document, Node, NodeId};

use crate::display_list::{DisplayItem, DisplayList};
use crate::options::LayoutOptions;
use crate::style::Style;
use crate::text::{FontError, TextMetrics};

/// Lays out every text node of `doc` into a display list.
///
/// Pure with respect to `doc`; the only failure is a font the metrics provider cannot resolve.
pub fn layout<M: TextMetrics>(
    doc: &Document,
    metrics: &M,
    options: &LayoutOptions,
) -> Result<DisplayList<M::Font>, FontError> {
    let mut engine = InlineLayout::new(metrics, *options);
    engine.walk(doc)?;
    engine.flush();
    log::debug!(
        target: "layout",
        "laid out {} items on {} lines, content height {}",
        engine.items.len(),
        engine.lines,
        engine.cursor_y
    );
    Ok(DisplayList::new(engine.items, engine.cursor_y))
}

pub fn layout_with_defaults<M: TextMetrics>(
    doc: &Document,
    metrics: &M,
) -> Result<DisplayList<M::Font>, FontError> {
    layout(doc, metrics, &LayoutOptions::defaults())
}

// Depth-first walk without recursion: `Leave` is pushed under the children so close effects
// run after the whole subtree.
enum Frame {
    Enter(NodeId),
    Leave(NodeId),
}

struct PendingWord<F> {
    x: f32,
    text: String,
    font: F,
}

struct InlineLayout<'m, M: TextMetrics> {
    metrics: &'m M,
    options: LayoutOptions,
    style: Style,
    cursor_x: f32,
    cursor_y: f32,
    line: Vec<PendingWord<M::Font>>,
    items: Vec<DisplayItem<M::Font>>,
    lines: usize,
}

impl<'m, M: TextMetrics> InlineLayout<'m, M> {
    fn new(metrics: &'m M, options: LayoutOptions) -> Self {
        Self {
            metrics,
            options,
            style: Style::new(options.default_size),
            cursor_x: options.hstep,
            cursor_y: options.vstep,
            line: Vec::new(),
            items: Vec::new(),
            lines: 0,
        }
    }

    fn walk(&mut self, doc: &Document) -> Result<(), FontError> {
        let mut stack = vec![Frame::Enter(doc.root())];
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter(id) => match doc.node(id) {
                    Node::Text { text, .. } => self.text(text)?,
                    Node::Element(element) => {
                        self.open_tag(&element.tag);
                        stack.push(Frame::Leave(id));
                        stack.extend(element.children.iter().rev().map(|&c| Frame::Enter(c)));
                    }
                },
                Frame::Leave(id) => {
                    if let Some(element) = doc.element(id) {
                        self.close_tag(&element.tag);
                    }
                }
            }
        }
        Ok(())
    }

    fn open_tag(&mut self, tag: &str) {
        if tag == "br" {
            self.flush();
        }
        self.style.open(tag, &self.options);
    }

    fn close_tag(&mut self, tag: &str) {
        if tag == "p" {
            self.flush();
            self.cursor_y += self.options.vstep;
        }
        self.style.close(tag, &self.options);
    }

    fn text(&mut self, text: &str) -> Result<(), FontError> {
        for word in text.split_whitespace() {
            let font = self.metrics.resolve(self.style.font_key())?;
            let width = self.metrics.measure(&font, word);
            if self.cursor_x + width >= self.options.content_right() {
                self.flush();
            }
            // Space is measured in the word's own font, at append time.
            let space = self.metrics.measure(&font, " ");
            self.line.push(PendingWord {
                x: self.cursor_x,
                text: word.to_string(),
                font,
            });
            self.cursor_x += width + space;
        }
        Ok(())
    }

    fn flush(&mut self) {
        if self.line.is_empty() {
            return;
        }
        let metrics = self.metrics;
        let leading = self.options.leading;

        let max_ascent = self
            .line
            .iter()
            .map(|word| metrics.ascent(&word.font))
            .fold(0.0_f32, f32::max);
        let max_descent = self
            .line
            .iter()
            .map(|word| metrics.descent(&word.font))
            .fold(0.0_f32, f32::max);

        let baseline = self.cursor_y + leading * max_ascent;
        log::trace!(
            target: "layout",
            "flushing {} words at baseline {baseline}",
            self.line.len()
        );
        for word in self.line.drain(..) {
            let y = baseline - metrics.ascent(&word.font);
            self.items.push(DisplayItem {
                x: word.x,
                y,
                text: word.text,
                font: word.font,
            });
        }

        self.cursor_y = baseline + leading * max_descent;
        self.cursor_x = self.options.hstep;
        self.lines += 1;
    }
}
