//! Alignment-driven tree building.
//!
//! papr has no brackets and no fixed indentation unit. Nesting is recovered
//! from columns alone: every token attaches to the closest *anchor* strictly
//! to its left, where an anchor is an earlier token still open on the stack.
//!
//! - A text token attaches under the nearest colon (or the document root) and
//!   becomes a [`Key`](crate::NodeKind::Key).
//! - A colon attaches under the nearest text token and becomes a
//!   [`Group`](crate::NodeKind::Group). Several colons aligned under the same
//!   text produce several groups, which is how arrays are written.
//!
//! Frames that are not strictly left of the incoming token, or have the wrong
//! kind, are popped for good. That pop-while-mismatch loop is what makes a
//! token that sits left of its neighbours fall back to an ancestor instead of
//! becoming a sibling.
//!
//! Nodes are kept in a flat arena while the document is read, and each open
//! frame remembers the arena slot of its node, so attaching a token costs the
//! same at any depth. The nested [`Node`] tree is assembled once at the end.
//!
//! [`build`] returns the raw tree; [`parse`](crate::parse) runs the
//! [simplifier](crate::simplify) afterwards.
//!
//! ```rust
//! use papr::lexer::tokenize;
//! use papr::parser::build;
//! use papr::NodeKind;
//!
//! let raw = build(&tokenize("seasons: spring\n       : summer\n")).unwrap();
//! let seasons = &raw[0];
//! assert_eq!(seasons.len(), 2);
//! assert!(seasons.iter().all(|g| g.kind() == NodeKind::Group));
//! ```

use crate::lexer::{Token, TokenKind};
use crate::{Error, Node, PaprOptions, Result};

/// What established a frame on the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Anchor {
    /// The synthetic bottom frame. Accepts text tokens at any column.
    Root,
    Text,
    Colon,
}

impl From<TokenKind> for Anchor {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Text => Anchor::Text,
            TokenKind::Colon => Anchor::Colon,
        }
    }
}

/// One open anchor and the arena slot of the node it established.
#[derive(Clone, Copy, Debug)]
struct Frame {
    anchor: Anchor,
    column: usize,
    slot: usize,
}

impl Frame {
    const ROOT: Frame = Frame {
        anchor: Anchor::Root,
        column: 0,
        slot: Arena::ROOT,
    };
}

/// Flat node storage used while building. Children are recorded as slot
/// indices, and a child's slot is always greater than its parent's.
struct Arena {
    nodes: Vec<Node>,
    children: Vec<Vec<usize>>,
}

impl Arena {
    const ROOT: usize = 0;

    fn new() -> Self {
        Arena {
            nodes: vec![Node::new_root()],
            children: vec![Vec::new()],
        }
    }

    fn attach(&mut self, parent: usize, node: Node) -> usize {
        let slot = self.nodes.len();
        self.nodes.push(node);
        self.children.push(Vec::new());
        self.children[parent].push(slot);
        slot
    }

    /// Nests every node under its parent, deepest slots first.
    fn assemble(self) -> Node {
        let Arena { nodes, children } = self;
        let mut slots: Vec<Option<Node>> = nodes.into_iter().map(Some).collect();

        for (slot, kids) in children.iter().enumerate().rev() {
            let adopted: Vec<Node> = kids.iter().filter_map(|&kid| slots[kid].take()).collect();
            if let Some(node) = slots[slot].as_mut() {
                node.children = adopted;
            }
        }

        slots
            .first_mut()
            .and_then(Option::take)
            .unwrap_or_else(Node::new_root)
    }
}

/// Builds the raw (unsimplified) tree for a token sequence with the default
/// nesting limit.
///
/// # Errors
///
/// Returns [`Error::Malformed`] for the first token that has no anchor of the
/// right kind to its left, e.g. a colon at the very start of a document, and
/// [`Error::DepthLimit`] for the first token nested too deeply.
pub fn build(tokens: &[Token]) -> Result<Node> {
    build_with_options(tokens, &PaprOptions::default())
}

/// Builds the raw tree, enforcing `options.max_depth`.
///
/// # Errors
///
/// See [`build`].
pub fn build_with_options(tokens: &[Token], options: &PaprOptions) -> Result<Node> {
    let mut arena = Arena::new();
    let mut stack = vec![Frame::ROOT];

    for token in tokens {
        let found = match token.kind {
            TokenKind::Text => seek(&mut stack, token.column, |anchor| {
                matches!(anchor, Anchor::Colon | Anchor::Root)
            }),
            TokenKind::Colon => seek(&mut stack, token.column, |anchor| anchor == Anchor::Text),
        };

        let Some(parent) = found else {
            let msg = match token.kind {
                TokenKind::Text => "text has no colon to its left to attach to",
                TokenKind::Colon => "colon has no text to its left to attach to",
            };
            log::error!(
                "failed to parse papr document at line {}, column {}: {}",
                token.line,
                token.column,
                msg
            );
            return Err(Error::malformed(token.line, token.column, msg));
        };

        let depth = stack.len();
        if depth > options.max_depth {
            log::error!(
                "papr document nests deeper than {} levels at line {}, column {}",
                options.max_depth,
                token.line,
                token.column
            );
            return Err(Error::depth_limit(
                token.line,
                token.column,
                options.max_depth,
            ));
        }

        let node = match token.kind {
            TokenKind::Text => Node::new_key(token.text.as_str()),
            TokenKind::Colon => Node::new_group(),
        };
        let slot = arena.attach(parent, node);

        log::trace!(
            "{:?} at {}:{} attached at depth {}",
            token.kind,
            token.line,
            token.column,
            depth
        );

        stack.push(Frame {
            anchor: token.kind.into(),
            column: token.column,
            slot,
        });
    }

    Ok(arena.assemble())
}

/// Pops frames until the top one is strictly left of `column` and accepted,
/// then returns its arena slot. Returns `None` if the stack runs empty.
fn seek(
    stack: &mut Vec<Frame>,
    column: usize,
    accepts: impl Fn(Anchor) -> bool,
) -> Option<usize> {
    while let Some(top) = stack.last() {
        if top.column < column && accepts(top.anchor) {
            return Some(top.slot);
        }
        stack.pop();
    }
    None
}
