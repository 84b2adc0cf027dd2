//! Trait definitions for document traversal
//!
//! The extractor only needs parent links, children, tag names and text.
//! Infrastructure implementations live in other crates (`pollen-extractor`
//! wraps `scraper::Html`).

/// A node in a parsed document tree
pub trait DocumentNode: Sized {
    /// Lower-case tag name of an element node
    fn tag_name(&self) -> &str;

    /// The enclosing element, if any
    fn parent(&self) -> Option<Self>;

    /// Child elements in document order
    fn children(&self) -> Vec<Self>;

    /// Descendant text nodes in document order, unmodified
    fn text_fragments(&self) -> Vec<String>;

    /// Trimmed text fragments joined with `separator`, empty fragments dropped
    fn joined_text(&self, separator: &str) -> String {
        self.text_fragments()
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// A parsed document
pub trait Document {
    /// Node type of this document
    type Node: DocumentNode;

    /// The outermost element
    fn root(&self) -> Self::Node;

    /// Every element with the given tag name, in document order
    fn nodes_by_tag(&self, tag: &str) -> Vec<Self::Node> {
        let mut found = Vec::new();
        let mut stack = vec![self.root()];

        // Pre-order walk; children are pushed reversed so the first child pops first
        while let Some(node) = stack.pop() {
            let mut children = node.children();
            children.reverse();
            if node.tag_name().eq_ignore_ascii_case(tag) {
                found.push(node);
            }
            stack.extend(children);
        }

        found
    }

    /// All text in the document, concatenated without separators
    fn full_text(&self) -> String {
        self.root().text_fragments().concat()
    }
}
