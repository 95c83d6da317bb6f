//! Rendering node trees back into aligned papr text.
//!
//! The renderer always works on a [simplified](crate::simplify) copy of its
//! input. It tracks the column (`depth`) at which the current level's content
//! starts:
//!
//! - a key prints `key: ` and its content continues at `depth + width + 2`
//! - a value prints its text and ends the line
//! - every group after the first prints a leading `: ` two columns left of
//!   `depth`, directly under the establishing colon, and its content stays at
//!   `depth`
//!
//! Siblings after the first are padded to `depth` so they line up under the
//! first one, which is exactly what the tree builder needs to put them back
//! at the same level.
//!
//! Text is written bare unless it would be misread: then it is quoted, inner
//! `"` become `\"`, and continuation lines are padded to the column of the
//! opening quote so the tokenizer's dedent restores them exactly.
//!
//! ```rust
//! use papr::{parse, serialize};
//!
//! let root = parse("title: \"Episode: Pilot\"\n").unwrap();
//! assert_eq!(root["title"].value(), Some("Episode: Pilot"));
//! assert_eq!(serialize(&root), "title: \"Episode: Pilot\"\n");
//! ```

use crate::lexer::is_blank;
use crate::{Node, NodeKind};
use std::borrow::Cow;

/// Renders `node` as papr text.
///
/// The node's children are written at column 1; `node` itself is treated as
/// the document root whatever its kind.
#[must_use]
pub fn serialize(node: &Node) -> String {
    let simplified = node.simplified();
    let mut output = String::with_capacity(256);
    write_children(&mut output, &simplified, 0);
    output
}

fn write_children(output: &mut String, node: &Node, depth: usize) {
    for (position, child) in node.iter().enumerate() {
        let first = position == 0;

        match child.kind() {
            NodeKind::Key => {
                if !first {
                    pad(output, depth);
                }
                let key = sanitize(child.text(), depth);
                let next_depth = match key.rsplit_once('\n') {
                    Some((_, last_line)) => last_line.chars().count() + 2,
                    None => depth + key.chars().count() + 2,
                };
                output.push_str(&key);
                output.push_str(": ");
                if child.is_empty() {
                    output.push('\n');
                } else {
                    write_children(output, child, next_depth);
                }
            }
            NodeKind::Value => {
                if !first {
                    pad(output, depth);
                }
                output.push_str(&sanitize(child.text(), depth));
                output.push('\n');
            }
            NodeKind::Group | NodeKind::Root => {
                if !first {
                    pad(output, depth.saturating_sub(2));
                    output.push_str(": ");
                }
                if child.is_empty() {
                    output.push('\n');
                } else {
                    write_children(output, child, depth);
                }
            }
        }
    }
}

#[inline]
fn pad(output: &mut String, count: usize) {
    output.extend(std::iter::repeat(' ').take(count));
}

fn needs_quotes(s: &str) -> bool {
    s.is_empty()
        || s.contains([':', '#', '\n'])
        || s.starts_with('"')
        || s.starts_with(is_blank)
        || s.ends_with(is_blank)
}

/// Quotes and escapes `text` if the tokenizer would not read it back as-is.
/// `depth` is the 0-based column the text starts at.
fn sanitize(text: &str, depth: usize) -> Cow<'_, str> {
    if !needs_quotes(text) {
        return Cow::Borrowed(text);
    }
    if text.ends_with('\\') {
        log::warn!(
            "quoted text ending in a backslash will not read back as written: {:?}",
            text
        );
    }

    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\n' => {
                quoted.push('\n');
                pad(&mut quoted, depth + 1);
            }
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    Cow::Owned(quoted)
}
