//! The papr node tree.
//!
//! Every parsed or constructed document is a tree of [`Node`]s. A node owns its
//! children outright; there are no parent pointers and no shared subtrees, so
//! cloning a node deep-copies the subtree and moving it transfers ownership.
//!
//! ## Node kinds
//!
//! | Kind | Text | Children |
//! |------|------|----------|
//! | [`NodeKind::Root`] | unused | top-level keys |
//! | [`NodeKind::Key`] | field name | the key's content |
//! | [`NodeKind::Group`] | unused | one array element |
//! | [`NodeKind::Value`] | scalar text | none |
//!
//! A key or group with exactly one value child is *scalar-valued*, see
//! [`Node::has_value`].
//!
//! ## Lookups never panic
//!
//! Named accessors return `Option`. Indexing with `[]` returns the shared
//! invalid sentinel on a miss, so lookups can be chained and checked once:
//!
//! ```rust
//! use papr::parse;
//!
//! let root = parse("name: John\n").unwrap();
//! assert_eq!(root["name"].value(), Some("John"));
//! assert!(root["missing"]["deeper"][3].is_invalid());
//! ```

use std::fmt;
use std::ops::Index;

/// The role a [`Node`] plays in the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    /// Top-level container. Also the kind of the invalid sentinel.
    #[default]
    Root,
    /// One element of a one-to-many relationship.
    Group,
    /// A named field.
    Key,
    /// Scalar text.
    Value,
}

/// A node in a papr document tree.
///
/// Equality is structural: two nodes are equal when their kinds, texts and
/// children are equal. The invalid sentinel is therefore equal to an empty
/// root, and must be detected with [`Node::is_invalid`] instead.
///
/// # Examples
///
/// ```rust
/// use papr::{serialize, Node};
///
/// let mut root = Node::new_root();
/// root.add_key("name").add_value("John");
/// let seasons = root.add_key("seasons");
/// seasons.add_group().add_value("spring");
/// seasons.add_group().add_value("summer");
///
/// assert_eq!(
///     serialize(&root),
///     "name: John\nseasons: spring\n       : summer\n"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) text: String,
    pub(crate) children: Vec<Node>,
}

static INVALID: Node = Node {
    kind: NodeKind::Root,
    text: String::new(),
    children: Vec::new(),
};

impl Node {
    fn with_kind(kind: NodeKind, text: String) -> Self {
        Node {
            kind,
            text,
            children: Vec::new(),
        }
    }

    /// Creates an empty top-level container.
    #[must_use]
    pub fn new_root() -> Self {
        Self::with_kind(NodeKind::Root, String::new())
    }

    /// Creates an empty array element.
    #[must_use]
    pub fn new_group() -> Self {
        Self::with_kind(NodeKind::Group, String::new())
    }

    /// Creates a key node with no content.
    #[must_use]
    pub fn new_key(key: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Key, key.into())
    }

    /// Creates a scalar value node.
    #[must_use]
    pub fn new_value(value: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Value, value.into())
    }

    /// Returns the shared invalid sentinel.
    ///
    /// This is what `[]` indexing yields on a miss.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use papr::Node;
    ///
    /// assert!(Node::invalid().is_invalid());
    /// assert!(!Node::new_root().is_invalid());
    /// ```
    #[must_use]
    pub fn invalid() -> &'static Node {
        &INVALID
    }

    /// Returns `true` if this node is the invalid sentinel.
    ///
    /// The check is by identity, not by value.
    #[inline]
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        std::ptr::eq(self, &INVALID)
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the raw text payload regardless of kind.
    ///
    /// Prefer [`Node::key`] and [`Node::value`], which check the kind.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the number of children.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the node has no children.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self.kind, NodeKind::Group)
    }

    #[inline]
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self.kind, NodeKind::Value)
    }

    /// Returns `true` if this node is a key.
    #[inline]
    #[must_use]
    pub const fn has_key(&self) -> bool {
        matches!(self.kind, NodeKind::Key)
    }

    /// Returns `true` if this key or group holds exactly one value child.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use papr::parse;
    ///
    /// let root = parse("name: John\nseasons: spring\n       : fall\n").unwrap();
    /// assert!(root["name"].has_value());
    /// assert!(!root["seasons"].has_value());
    /// assert!(root["seasons"][1].has_value());
    /// ```
    #[must_use]
    pub fn has_value(&self) -> bool {
        matches!(self.kind, NodeKind::Key | NodeKind::Group)
            && matches!(self.children.as_slice(), [child] if child.is_value())
    }

    /// Returns the field name if this node is a key.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.has_key().then_some(self.text.as_str())
    }

    /// Returns the scalar content of a scalar-valued key or group.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use papr::parse;
    ///
    /// let root = parse("age: 42\n").unwrap();
    /// assert_eq!(root["age"].value(), Some("42"));
    /// assert_eq!(root.value(), None);
    /// ```
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        if self.has_value() {
            self.children.first().map(|child| child.text.as_str())
        } else {
            None
        }
    }

    /// Renames a key. Returns `false` and leaves the node untouched if it is
    /// not a key.
    pub fn update_key(&mut self, key: impl Into<String>) -> bool {
        if !self.has_key() {
            return false;
        }
        self.text = key.into();
        true
    }

    /// Replaces the scalar content of a scalar-valued key or group. Returns
    /// `false` if the node is not scalar-valued.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use papr::parse;
    ///
    /// let mut root = parse("age: 42\n").unwrap();
    /// let age = root.find_mut("age").unwrap();
    /// assert!(age.update_value("43"));
    /// assert_eq!(root["age"].value(), Some("43"));
    /// ```
    pub fn update_value(&mut self, value: impl Into<String>) -> bool {
        if !self.has_value() {
            return false;
        }
        match self.children.first_mut() {
            Some(child) => {
                child.text = value.into();
                true
            }
            None => false,
        }
    }

    /// Returns the child at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.children.get_mut(index)
    }

    /// Returns the first key child whose text equals `key`.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|child| child.has_key() && child.text == key)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.children
            .iter_mut()
            .find(|child| child.has_key() && child.text == key)
    }

    /// Appends `node` and returns a mutable reference to it.
    pub fn add_node(&mut self, node: Node) -> &mut Node {
        let index = self.children.len();
        self.children.push(node);
        &mut self.children[index]
    }

    /// Appends a key child and returns it.
    pub fn add_key(&mut self, key: impl Into<String>) -> &mut Node {
        self.add_node(Node::new_key(key))
    }

    /// Appends a value child and returns it.
    pub fn add_value(&mut self, value: impl Into<String>) -> &mut Node {
        self.add_node(Node::new_value(value))
    }

    /// Appends a group child and returns it.
    pub fn add_group(&mut self) -> &mut Node {
        self.add_node(Node::new_group())
    }

    /// Removes and returns the child at `index`, or `None` if out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<Node> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.children.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.children.iter_mut()
    }
}

impl Index<usize> for Node {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        self.get(index).unwrap_or(&INVALID)
    }
}

impl<'a> Index<&'a str> for Node {
    type Output = Node;

    fn index(&self, key: &'a str) -> &Node {
        self.find(key).unwrap_or(&INVALID)
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl<'a> IntoIterator for &'a mut Node {
    type Item = &'a mut Node;
    type IntoIter = std::slice::IterMut<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter_mut()
    }
}

impl IntoIterator for Node {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(mut self) -> Self::IntoIter {
        std::mem::take(&mut self.children).into_iter()
    }
}

/// Drops the subtree with an explicit worklist so that very deep trees do not
/// exhaust the stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::serialize(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Node {
        let mut root = Node::new_root();
        root.add_key("name").add_value("John");
        root.add_key("age").add_value("42");
        root
    }

    #[test]
    fn test_sentinel_identity() {
        let empty = Node::new_root();
        assert_eq!(&empty, Node::invalid());
        assert!(!empty.is_invalid());
        assert!(Node::invalid().is_invalid());
        assert!(!Node::invalid().clone().is_invalid());
    }

    #[test]
    fn test_index_misses_yield_sentinel() {
        let root = person();
        assert!(root[5].is_invalid());
        assert!(root["nope"].is_invalid());
        assert!(root["nope"]["still"][0].is_invalid());
        assert_eq!(root["nope"].value(), None);
    }

    #[test]
    fn test_index_by_key_and_position() {
        let root = person();
        assert_eq!(root["age"].value(), Some("42"));
        assert_eq!(root[0].key(), Some("name"));
        assert_eq!(root[0][0].text(), "John");
    }

    #[test]
    fn test_find_skips_values_with_same_text() {
        let mut root = Node::new_root();
        root.add_value("name");
        root.add_key("name").add_value("John");
        assert_eq!(root["name"].value(), Some("John"));
    }

    #[test]
    fn test_has_value_rules() {
        let mut key = Node::new_key("k");
        assert!(!key.has_value());
        key.add_value("v");
        assert!(key.has_value());
        key.add_value("w");
        assert!(!key.has_value());

        let mut group = Node::new_group();
        group.add_value("x");
        assert!(group.has_value());

        let mut value = Node::new_value("v");
        value.children.push(Node::new_value("w"));
        assert!(!value.has_value());
    }

    #[test]
    fn test_update_key_and_value() {
        let mut root = person();
        {
            let name = root.find_mut("name").unwrap();
            assert!(name.update_key("first_name"));
            assert!(name.update_value("Jane"));
        }
        assert_eq!(root["first_name"].value(), Some("Jane"));

        let mut group = Node::new_group();
        assert!(!group.update_key("x"));
        assert!(!group.update_value("x"));
    }

    #[test]
    fn test_add_and_remove() {
        let mut root = person();
        root.add_key("city").add_value("Oslo");
        assert_eq!(root.len(), 3);

        let removed = root.remove_at(0).unwrap();
        assert_eq!(removed.key(), Some("name"));
        assert_eq!(root.len(), 2);
        assert!(root.remove_at(10).is_none());
    }

    #[test]
    fn test_iteration_order() {
        let root = person();
        let keys: Vec<_> = root.iter().filter_map(Node::key).collect();
        assert_eq!(keys, vec!["name", "age"]);

        let mut root = root;
        for child in &mut root {
            child.update_key(child.text().to_uppercase());
        }
        let keys: Vec<_> = root.into_iter().map(|child| child.text().to_string()).collect();
        assert_eq!(keys, vec!["NAME", "AGE"]);
    }

    #[test]
    fn test_deep_chain_drops() {
        let mut root = Node::new_root();
        let mut tail = &mut root;
        for _ in 0..200_000 {
            tail = tail.add_key("a").add_group();
        }
        drop(root);
    }
}
