//! # papr
//!
//! A parser and serializer for papr, a plain-text key/value format whose
//! structure comes from the horizontal alignment of colons instead of
//! brackets or a fixed indentation width.
//!
//! ## What does papr look like?
//!
//! ```text
//! title: "Episode: Pilot"     # quotes protect the colon
//! owner: name: John
//!        age: 42
//! seasons: spring
//!        : summer              # aligned under the first colon
//! desc: a paragraph can run
//!       over several lines
//! ```
//!
//! A token belongs to the nearest anchor strictly to its left: text sits under
//! a colon, a colon sits under text. Colons stacked under the same text form
//! an array. See [`format`] for the full grammar.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! papr = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Working with node trees
//!
//! ```rust
//! use papr::{parse, serialize};
//!
//! let mut root = parse("owner: name: John\n       age: 42\n").unwrap();
//! assert_eq!(root["owner"]["age"].value(), Some("42"));
//!
//! // Misses never panic; they return a shared invalid node.
//! assert!(root["owner"]["email"]["domain"].is_invalid());
//!
//! if let Some(age) = root.find_mut("owner").and_then(|owner| owner.find_mut("age")) {
//!     assert!(age.update_value("43"));
//! }
//! assert_eq!(serialize(&root), "owner: name: John\n       age: 43\n");
//! ```
//!
//! ### Typed data through serde
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use papr::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Member {
//!     name: String,
//!     age: u32,
//! }
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Club {
//!     title: String,
//!     members: Vec<Member>,
//! }
//!
//! let club = Club {
//!     title: "Chess".to_string(),
//!     members: vec![
//!         Member { name: "John".to_string(), age: 42 },
//!         Member { name: "Jane".to_string(), age: 37 },
//!     ],
//! };
//!
//! let text = to_string(&club).unwrap();
//! assert_eq!(
//!     text,
//!     "title: Chess\n\
//!      members: name: John\n\
//!      \x20        age: 42\n\
//!      \x20      : name: Jane\n\
//!      \x20        age: 37\n"
//! );
//!
//! let back: Club = from_str(&text).unwrap();
//! assert_eq!(back, club);
//! ```
//!
//! ### Building trees with the papr! macro
//!
//! ```rust
//! use papr::{papr, serialize};
//!
//! let root = papr!({
//!     "name": "John",
//!     "tags": ["admin", "ops"]
//! });
//! assert_eq!(serialize(&root), "name: John\ntags: admin\n    : ops\n");
//! ```
//!
//! ## Diagnostics
//!
//! The crate reports through the [`log`](https://docs.rs/log) facade and
//! never installs a logger. Parse failures are logged at `error`, recovered
//! unterminated quotes at `warn`, per-parse counts at `debug` and each tree
//! attachment at `trace`.
//!
//! ## Demos
//!
//! The `demos/` directory holds runnable programs:
//!
//! - **`simple.rs`** - typed round trip through serde
//! - **`macro.rs`** - building documents with `papr!`
//! - **`dynamic_nodes.rs`** - editing a parsed tree in place
//!
//! Run one with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod format;
pub mod lexer;
pub mod macros;
pub mod node;
pub mod options;
pub mod parser;
pub mod render;
pub mod ser;
pub mod simplify;

pub use de::{from_node, Deserializer};
pub use error::{Error, Result};
pub use node::{Node, NodeKind};
pub use options::PaprOptions;
pub use render::serialize;
pub use ser::{to_node, NodeSerializer};
pub use simplify::simplify;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Parses papr text into a canonical tree with lenient quote handling.
///
/// # Examples
///
/// ```rust
/// use papr::parse;
///
/// let root = parse("seasons: spring\n       : summer\n").unwrap();
/// assert_eq!(root["seasons"].len(), 2);
/// assert_eq!(root["seasons"][1].value(), Some("summer"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Malformed`] with the 1-based position of the first token
/// that has nothing to attach to.
pub fn parse(input: &str) -> Result<Node> {
    parse_with_options(input, PaprOptions::default())
}

/// Parses papr text into a canonical tree.
///
/// # Errors
///
/// Returns [`Error::Malformed`] for tokens with no anchor,
/// [`Error::DepthLimit`] for tokens nested deeper than `options.max_depth`,
/// and [`Error::UnterminatedQuote`] when `options.strict_quotes` is set and a
/// quote is never closed.
pub fn parse_with_options(input: &str, options: PaprOptions) -> Result<Node> {
    let tokens = lexer::tokenize_with_options(input, &options)?;
    let mut root = parser::build_with_options(&tokens, &options)?;
    root.simplify();
    log::debug!(
        "parsed {} tokens into {} top-level nodes",
        tokens.len(),
        root.len()
    );
    Ok(root)
}

/// Serializes any `T: Serialize` to papr text.
///
/// # Examples
///
/// ```rust
/// use papr::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), "x: 1\ny: 2\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if the value has no papr rendition.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(serialize(&to_node(value)?))
}

/// Serializes any `T: Serialize` to a writer as papr text.
///
/// # Examples
///
/// ```rust
/// use papr::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(buffer, b"x: 1\ny: 2\n");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string(value)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserializes an instance of `T` from papr text.
///
/// # Examples
///
/// ```rust
/// use papr::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns a parse error for malformed input, or [`Error::TypeMismatch`] if
/// the document does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let root = parse(s)?;
    from_node(&root)
}

/// Deserializes an instance of `T` from bytes of papr text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, are not a valid papr
/// document, or cannot be deserialized to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Deserializes an instance of `T` from an I/O stream of papr text.
///
/// # Examples
///
/// ```rust
/// use papr::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(b"x: 1\ny: 2")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid papr, or the
/// document cannot be deserialized to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_serialize_deserialize_point() {
        let point = Point { x: 1, y: 2 };
        let text = to_string(&point).unwrap();
        let point_back: Point = from_str(&text).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_serialize_deserialize_user() {
        let user = User {
            id: 123,
            name: "Alice: admin".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let text = to_string(&user).unwrap();
        let user_back: User = from_str(&text).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn test_parse_then_serialize_is_stable() {
        let input = "name: John\nmembers: name: Ann\n         age: 3\n       : name: Bob\n";
        let root = parse(input).unwrap();
        assert_eq!(serialize(&root), input);
    }

    #[test]
    fn test_strict_and_lenient_quotes() {
        let input = "title: \"Pilot";
        assert_eq!(parse(input).unwrap()["title"].value(), Some("Pilot"));
        assert_eq!(
            parse_with_options(input, PaprOptions::strict()),
            Err(Error::unterminated_quote(1, 8))
        );
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        let result: Result<Point> = from_slice(&[0xff, 0xfe]);
        assert!(matches!(result, Err(Error::Custom(_))));
    }

    #[test]
    fn test_to_writer() {
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &Point { x: -1, y: 0 }).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "x: -1\ny: 0\n");
    }
}
