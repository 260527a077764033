use crate::types::{Document, Node, NodeId};

/// Pre-order iterator over a subtree, including its start node.
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack.extend(self.doc.children(id).iter().rev().copied());
        Some(id)
    }
}

impl Document {
    pub fn descendants(&self, from: NodeId) -> Descendants<'_> {
        Descendants {
            doc: self,
            stack: vec![from],
        }
    }

    /// First element with `tag` in document order.
    pub fn find_first(&self, tag: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .find(|&id| self.node(id).tag() == Some(tag))
    }

    /// Concatenated text of all text nodes below `id`, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node in self.descendants(id) {
            if let Node::Text { text, .. } = self.node(node) {
                out.push_str(text);
            }
        }
        out
    }
}
