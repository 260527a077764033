use crate::types::{Document, Node, NodeId};
use std::fmt::{self, Write};

/// Deterministic, line-per-node rendering of a [`Document`] for tests and debugging.
/// Not a stable format.
///
/// - Elements render as `<tag key="value" ...>` with attributes in insertion order.
/// - Text renders as a quoted, escaped string.
/// - Each nesting level indents by two spaces.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomSnapshotOptions {
    pub ignore_attributes: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomSnapshot {
    lines: Vec<String>,
}

impl DomSnapshot {
    pub fn new(doc: &Document, options: DomSnapshotOptions) -> Self {
        let mut lines = Vec::with_capacity(doc.len());
        // Explicit stack so very deep trees don't overflow.
        let mut stack: Vec<(NodeId, usize)> = vec![(doc.root(), 0)];
        while let Some((id, depth)) = stack.pop() {
            let mut line = String::new();
            line.extend(std::iter::repeat_n(' ', depth * INDENT_STEP));
            write_node_line(&mut line, doc.node(id), &options);
            lines.push(line);
            for &child in doc.children(id).iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        Self { lines }
    }

    pub fn as_lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for DomSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

const INDENT_STEP: usize = 2;

#[derive(Debug)]
pub struct SnapshotMismatch {
    line: usize,
    expected: Option<String>,
    actual: Option<String>,
    rendered: String,
}

impl fmt::Display for SnapshotMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DOM snapshot mismatch at line {}", self.line + 1)?;
        writeln!(
            f,
            "expected: {}",
            self.expected.as_deref().unwrap_or("<end of snapshot>")
        )?;
        writeln!(
            f,
            "actual:   {}",
            self.actual.as_deref().unwrap_or("<end of snapshot>")
        )?;
        writeln!(f, "actual snapshot:\n{}", self.rendered)
    }
}

impl std::error::Error for SnapshotMismatch {}

/// Compares a snapshot against expected lines, ignoring trailing whitespace on each line.
pub fn compare_snapshot<S: AsRef<str>>(
    expected: &[S],
    actual: &DomSnapshot,
) -> Result<(), Box<SnapshotMismatch>> {
    let actual_lines = actual.as_lines();
    let len = expected.len().max(actual_lines.len());
    for i in 0..len {
        let exp = expected.get(i).map(|s| s.as_ref().trim_end());
        let act = actual_lines.get(i).map(|s| s.trim_end());
        if exp != act {
            return Err(Box::new(SnapshotMismatch {
                line: i,
                expected: exp.map(str::to_string),
                actual: act.map(str::to_string),
                rendered: actual.render(),
            }));
        }
    }
    Ok(())
}

pub fn assert_snapshot_eq<S: AsRef<str>>(expected: &[S], doc: &Document) {
    let actual = DomSnapshot::new(doc, DomSnapshotOptions::default());
    if let Err(mismatch) = compare_snapshot(expected, &actual) {
        panic!("{mismatch}");
    }
}

fn write_node_line(out: &mut String, node: &Node, options: &DomSnapshotOptions) {
    match node {
        Node::Element(element) => {
            out.push('<');
            out.push_str(&element.tag);
            if !options.ignore_attributes {
                for (key, value) in element.attributes.iter() {
                    out.push(' ');
                    out.push_str(key);
                    out.push_str("=\"");
                    write_escaped(out, value);
                    out.push('"');
                }
            }
            out.push('>');
        }
        Node::Text { text, .. } => {
            out.push('"');
            write_escaped(out, text);
            out.push('"');
        }
    }
}

fn write_escaped(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ if ch.is_ascii() => out.push(ch),
            _ => {
                let _ = write!(out, "\\u{{{:X}}}", ch as u32);
            }
        }
    }
}
