//! Canonicalization of raw parse trees.
//!
//! The tree builder cannot know, while it attaches a token, whether that token
//! is a field name or a bare value, and every establishing colon introduces a
//! group even when only one element follows. Simplification rewrites the raw
//! tree bottom-up with three rules, applied in order to each node:
//!
//! 1. A key whose only child is a group adopts the group's children.
//! 2. A key or group whose children are two or more values gets a single value
//!    holding their texts joined by a space (continuation lines become one
//!    paragraph).
//! 3. A key left without children becomes a value.
//!
//! Groups themselves are never removed: a group is one array element even when
//! it wraps a single scalar.

use crate::{Node, NodeKind};

/// Simplifies `node` and returns it.
#[must_use]
pub fn simplify(mut node: Node) -> Node {
    node.simplify();
    node
}

impl Node {
    /// Rewrites this subtree into canonical shape in place.
    ///
    /// Simplification is idempotent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use papr::{Node, NodeKind};
    ///
    /// let mut key = Node::new_key("name");
    /// key.add_group().add_key("John");
    /// key.simplify();
    ///
    /// assert_eq!(key.value(), Some("John"));
    /// assert_eq!(key[0].kind(), NodeKind::Value);
    /// ```
    pub fn simplify(&mut self) {
        for child in &mut self.children {
            child.simplify();
        }

        while self.kind == NodeKind::Key
            && matches!(self.children.as_slice(), [only] if only.kind == NodeKind::Group)
        {
            let mut group = self.children.remove(0);
            self.children = std::mem::take(&mut group.children);
        }

        if matches!(self.kind, NodeKind::Key | NodeKind::Group)
            && self.children.len() > 1
            && self.children.iter().all(Node::is_value)
        {
            let merged = self
                .children
                .iter()
                .map(|child| child.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            self.children = vec![Node::new_value(merged)];
        }

        if self.kind == NodeKind::Key && self.children.is_empty() {
            self.kind = NodeKind::Value;
        }
    }

    /// Returns a simplified copy, leaving `self` untouched.
    #[must_use]
    pub fn simplified(&self) -> Node {
        simplify(self.clone())
    }
}
