use crate::tokenizer::Tokenizer;
use crate::types::{Attributes, Document, Element, Node, NodeId, Token};

/// Elements that never own children and are never pushed onto the open-element stack.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Tags that belong in `<head>` when they appear before any body content.
pub const HEAD_ELEMENTS: &[&str] = &[
    "base", "basefont", "bgsound", "noscript", "link", "meta", "title", "style", "script",
];

pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

pub fn is_head_element(name: &str) -> bool {
    HEAD_ELEMENTS.contains(&name)
}

/// Parses a full document into a tree rooted at `html`. Never fails.
pub fn parse(input: &str) -> Document {
    let mut builder = TreeBuilder::new();
    for token in Tokenizer::new(input) {
        builder.push(token);
    }
    builder.finish()
}

/// Splits raw tag text into a lowercased name and its attributes.
///
/// Returns `None` when the tag text has no name at all (`<>`).
pub fn parse_tag(raw: &str) -> Option<(String, Attributes)> {
    let mut parts = raw.split_whitespace();
    let name = parts.next()?.to_lowercase();
    let mut attributes = Attributes::new();
    for pair in parts {
        match pair.split_once('=') {
            Some((key, value)) => {
                attributes.insert(key.to_lowercase(), unquote(value).to_string());
            }
            None => attributes.insert(pair.to_lowercase(), String::new()),
        }
    }
    Some((name, attributes))
}

// Strips one leading quote and one trailing char; the trailing char is not checked.
fn unquote(value: &str) -> &str {
    let mut chars = value.chars();
    match (chars.next(), chars.next_back()) {
        (Some('"' | '\''), Some(_)) => chars.as_str(),
        _ => value,
    }
}

/// Incremental tree builder fed one token at a time.
///
/// Keeps a stack of unfinished elements. An opened element records its parent immediately
/// but is only attached to the parent's children when it is popped, so children always end
/// up in document order.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    unfinished: Vec<NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token<'_>) {
        match token {
            Token::Text(text) => self.text(&text),
            Token::Tag(raw) => self.tag(&raw),
        }
    }

    pub fn text(&mut self, text: &str) {
        if text.chars().all(char::is_whitespace) {
            return;
        }
        self.implicit_tags(None);
        let Some(&parent) = self.unfinished.last() else {
            unreachable!("implicit tags always open an html element");
        };
        let id = self.alloc(Node::Text {
            text: text.to_string(),
            parent,
        });
        self.append_child(parent, id);
    }

    pub fn tag(&mut self, raw: &str) {
        let Some((name, attributes)) = parse_tag(raw) else {
            log::trace!(target: "html.tree_builder", "ignoring empty tag");
            return;
        };
        if name.starts_with('!') {
            return;
        }
        self.implicit_tags(Some(name.as_str()));
        self.insert_tag(name, attributes);
    }

    /// Closes everything still open and returns the finished document.
    pub fn finish(mut self) -> Document {
        if self.unfinished.is_empty() {
            self.implicit_tags(None);
        }
        while self.unfinished.len() > 1 {
            self.close_top();
        }
        let Some(root) = self.unfinished.pop() else {
            unreachable!("finish always leaves the html root on the stack");
        };
        log::debug!(
            target: "html.tree_builder",
            "built document with {} nodes",
            self.nodes.len()
        );
        Document::from_parts(self.nodes, root)
    }

    fn insert_tag(&mut self, name: String, attributes: Attributes) {
        if name.starts_with('/') {
            if self.unfinished.len() == 1 {
                log::trace!(target: "html.tree_builder", "ignoring stray <{name}> at root");
                return;
            }
            self.close_top();
        } else if is_void_element(&name) {
            let Some(&parent) = self.unfinished.last() else {
                unreachable!("implicit tags always open an html element");
            };
            let id = self.alloc(Node::Element(Element {
                tag: name,
                attributes,
                children: Vec::new(),
                parent: Some(parent),
            }));
            self.append_child(parent, id);
        } else {
            let parent = self.unfinished.last().copied();
            let id = self.alloc(Node::Element(Element {
                tag: name,
                attributes,
                children: Vec::new(),
                parent,
            }));
            self.unfinished.push(id);
        }
    }

    fn implicit_tags(&mut self, tag: Option<&str>) {
        while let Some(missing) = self.missing_tag(tag) {
            log::trace!(
                target: "html.tree_builder",
                "inserting implied <{missing}> before {tag:?}"
            );
            self.insert_tag(missing.to_string(), Attributes::new());
        }
    }

    fn missing_tag(&self, tag: Option<&str>) -> Option<&'static str> {
        let tag_is = |name: &str| tag == Some(name);
        let is_head_tag = tag.is_some_and(is_head_element);

        match self.unfinished.as_slice() {
            [] if !tag_is("html") => Some("html"),
            [html]
                if self.tag_name(*html) == "html"
                    && !tag_is("head")
                    && !tag_is("body")
                    && !tag_is("/html") =>
            {
                Some(if is_head_tag { "head" } else { "body" })
            }
            [html, head]
                if self.tag_name(*html) == "html"
                    && self.tag_name(*head) == "head"
                    && !tag_is("/head")
                    && !is_head_tag =>
            {
                Some("/head")
            }
            _ => None,
        }
    }

    fn close_top(&mut self) {
        let Some(node) = self.unfinished.pop() else {
            return;
        };
        let Some(&parent) = self.unfinished.last() else {
            unreachable!("callers never pop the root");
        };
        self.append_child(parent, node);
    }

    fn tag_name(&self, id: NodeId) -> &str {
        self.nodes[id.index()].tag().unwrap_or_default()
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        match &mut self.nodes[parent.index()] {
            Node::Element(element) => element.children.push(child),
            Node::Text { .. } => unreachable!("tree builder parent is always an element"),
        }
    }
}
