//! The papr document format
//!
//! This module documents the format as implemented by this library. It holds
//! no code.
//!
//! # Overview
//!
//! papr is a key/value format for configuration-like data that people edit by
//! hand. There are no brackets, no list markers and no fixed indentation
//! unit: a document's structure is recovered from the columns its colons and
//! words start at.
//!
//! # Tokens
//!
//! A document is split into two kinds of tokens:
//!
//! - **text**: a run of characters ended by `:`, a newline, `#` or the end of
//!   the input, with surrounding spaces trimmed. Interior spaces are kept.
//! - **colon**: every `:` outside quotes and comments.
//!
//! A token's position is the line and column (1-based, counted in characters)
//! of its first non-space character.
//!
//! ## Quoting
//!
//! Text that starts with `"` runs until the next `"` not preceded by `\`.
//! Inside quotes `:`, `#` and newlines are ordinary characters and `\"` stands
//! for `"`. A `"` anywhere else in bare text is kept verbatim:
//!
//! ```text
//! title: "Episode: Pilot"
//! nick: The "Rock"
//! quote: "she said \"hi\""
//! ```
//!
//! When quoted text spans several lines, each continuation line loses up to
//! as many leading spaces as the column of the opening quote, so content can
//! be padded to line up under the quote without that padding becoming part
//! of it:
//!
//! ```text
//! poem: "roses are red
//!        violets are blue"
//! ```
//!
//! reads back as `"roses are red\nviolets are blue"`.
//!
//! A quote that is never closed takes the rest of the input by default. With
//! [`PaprOptions::strict_quotes`](crate::PaprOptions) it is an
//! [`Error::UnterminatedQuote`](crate::Error::UnterminatedQuote) instead.
//!
//! ## Comments
//!
//! Outside quotes, `#` starts a comment that runs to the end of the line.
//!
//! ```text
//! # owner details
//! name: John   # as on the passport
//! ```
//!
//! # Structure
//!
//! Every token looks for an **anchor** strictly to its left among the tokens
//! before it that are still open:
//!
//! | Token | Anchor it needs | Becomes |
//! |-------|-----------------|---------|
//! | text | a colon, or the start of the document | a key |
//! | colon | a text token | a group under that text |
//!
//! Anchors that do not qualify are closed for good, so a token that starts
//! further left than its predecessors falls back to an older anchor.
//!
//! ## Fields
//!
//! ```text
//! name: John
//! age: 42
//! ```
//!
//! ## Nested fields
//!
//! Fields of a nested object line up under the first one:
//!
//! ```text
//! owner: name: John
//!        age: 42
//! ```
//!
//! ## Arrays
//!
//! Extra colons aligned under the first colon after a key start new elements.
//! Elements may themselves hold nested fields:
//!
//! ```text
//! seasons: spring
//!        : summer
//!
//! members: name: John
//!          age: 42
//!        : name: Jane
//!          age: 37
//! ```
//!
//! A colon does not have to be exactly aligned: it attaches to the nearest
//! text to its left, so `  : summer` under `seasons` still adds an element.
//!
//! ## Paragraphs
//!
//! Bare lines aligned under a value continue it. They are joined with a
//! single space:
//!
//! ```text
//! desc: the quick
//!       brown fox
//! ```
//!
//! reads back as `the quick brown fox`.
//!
//! ## Bare keys
//!
//! A line with no colon is a key without content. It is what an empty list
//! serializes to, and what `None` reads from.
//!
//! # Canonical shape
//!
//! Parsed trees are simplified before they are returned. A key whose only
//! child is a group takes over the group's children, sibling values under a
//! key or group are merged into one, and a key with no children becomes a
//! value. Simplification is idempotent, and rendering a simplified tree then
//! parsing it gives back the same tree.
//!
//! # Rendering
//!
//! The renderer writes each key as `key: ` and continues its content on the
//! same line. Later siblings are padded to the column of the first one; later
//! array elements start with `: ` two columns left of their content. Text is
//! quoted when it is empty, contains `:`, `#` or a newline, starts with `"`,
//! or has leading or trailing spaces.
//!
//! # Limitations
//!
//! - A document cannot be a bare list: array elements need a key to their
//!   left.
//! - An array cannot sit directly inside another array.
//! - Quoted text ending in `\` does not survive a round trip, since the
//!   closing quote would read as escaped.
//! - A struct whose fields all serialize as bare keys comes back as one merged
//!   value.
//! - `Some` of an empty sequence or an empty struct is written as a bare key
//!   and reads back as `None`.
//! - Nesting is limited by
//!   [`PaprOptions::max_depth`](crate::PaprOptions::max_depth) when parsing.
