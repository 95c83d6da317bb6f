//! Converting Rust values into papr node trees.
//!
//! [`NodeSerializer`] maps the serde data model onto papr's three node kinds:
//!
//! | Rust | papr |
//! |------|------|
//! | struct, map | one key per field |
//! | bool, number, char, string | a value holding its `Display` text |
//! | `Vec`, tuple, slice | one group per element |
//! | `None` field | left out |
//! | empty sequence | a bare key |
//! | unit variant | a value holding the variant name |
//! | newtype, tuple and struct variants | a key named after the variant |
//!
//! papr has no syntax for a document that is a bare list or scalar, or for a
//! list directly inside a list, so those are rejected with
//! [`Error::UnsupportedType`].
//!
//! Most users should go through [`to_string`](crate::to_string) or
//! [`to_node`](crate::to_node):
//!
//! ```rust
//! use papr::to_string;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Show { title: String, seasons: Vec<u32> }
//!
//! let show = Show { title: "Episode: Pilot".to_string(), seasons: vec![1, 2] };
//! assert_eq!(
//!     to_string(&show).unwrap(),
//!     "title: \"Episode: Pilot\"\nseasons: 1\n       : 2\n"
//! );
//! ```

use crate::{Error, Node, Result};
use serde::{ser, Serialize};

/// The children a serialized value contributes to its parent node, or `None`
/// if the value is left out entirely.
pub type Content = Option<Vec<Node>>;

/// A serde serializer producing node [`Content`].
pub struct NodeSerializer;

pub struct SerializeElements {
    groups: Vec<Node>,
    variant: Option<&'static str>,
}

pub struct SerializeFields {
    keys: Vec<Node>,
    pending_key: Option<String>,
    variant: Option<&'static str>,
}

fn scalar(text: impl ToString) -> Result<Content> {
    Ok(Some(vec![Node::new_value(text.to_string())]))
}

fn with_children(mut node: Node, children: Vec<Node>) -> Node {
    node.children = children;
    node
}

fn wrap_variant(variant: Option<&'static str>, children: Vec<Node>) -> Content {
    match variant {
        Some(name) => Some(vec![with_children(Node::new_key(name), children)]),
        None => Some(children),
    }
}

impl ser::Serializer for NodeSerializer {
    type Ok = Content;
    type Error = Error;

    type SerializeSeq = SerializeElements;
    type SerializeTuple = SerializeElements;
    type SerializeTupleStruct = SerializeElements;
    type SerializeTupleVariant = SerializeElements;
    type SerializeMap = SerializeFields;
    type SerializeStruct = SerializeFields;
    type SerializeStructVariant = SerializeFields;

    fn serialize_bool(self, v: bool) -> Result<Content> {
        scalar(v)
    }

    fn serialize_i8(self, v: i8) -> Result<Content> {
        scalar(v)
    }

    fn serialize_i16(self, v: i16) -> Result<Content> {
        scalar(v)
    }

    fn serialize_i32(self, v: i32) -> Result<Content> {
        scalar(v)
    }

    fn serialize_i64(self, v: i64) -> Result<Content> {
        scalar(v)
    }

    fn serialize_i128(self, v: i128) -> Result<Content> {
        scalar(v)
    }

    fn serialize_u8(self, v: u8) -> Result<Content> {
        scalar(v)
    }

    fn serialize_u16(self, v: u16) -> Result<Content> {
        scalar(v)
    }

    fn serialize_u32(self, v: u32) -> Result<Content> {
        scalar(v)
    }

    fn serialize_u64(self, v: u64) -> Result<Content> {
        scalar(v)
    }

    fn serialize_u128(self, v: u128) -> Result<Content> {
        scalar(v)
    }

    fn serialize_f32(self, v: f32) -> Result<Content> {
        scalar(v)
    }

    fn serialize_f64(self, v: f64) -> Result<Content> {
        scalar(v)
    }

    fn serialize_char(self, v: char) -> Result<Content> {
        scalar(v)
    }

    fn serialize_str(self, v: &str) -> Result<Content> {
        scalar(v)
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Content> {
        let groups = v
            .iter()
            .map(|byte| with_children(Node::new_group(), vec![Node::new_value(byte.to_string())]))
            .collect();
        Ok(Some(groups))
    }

    fn serialize_none(self) -> Result<Content> {
        Ok(None)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Content>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Content> {
        scalar("")
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Content> {
        scalar("")
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Content> {
        scalar(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Content>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Content>
    where
        T: ?Sized + Serialize,
    {
        let children = value.serialize(NodeSerializer)?.unwrap_or_default();
        Ok(wrap_variant(Some(variant), children))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeElements> {
        Ok(SerializeElements::new(len.unwrap_or(0), None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeElements> {
        Ok(SerializeElements::new(len, None))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeElements> {
        Ok(SerializeElements::new(len, None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeElements> {
        Ok(SerializeElements::new(len, Some(variant)))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeFields> {
        Ok(SerializeFields::new(len.unwrap_or(0), None))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeFields> {
        Ok(SerializeFields::new(len, None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeFields> {
        Ok(SerializeFields::new(len, Some(variant)))
    }
}

impl SerializeElements {
    fn new(len: usize, variant: Option<&'static str>) -> Self {
        SerializeElements {
            groups: Vec::with_capacity(len),
            variant,
        }
    }

    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let children = value
            .serialize(NodeSerializer)?
            .ok_or_else(|| Error::unsupported_type("None inside a sequence"))?;

        if !children.is_empty() && children.iter().all(Node::is_group) {
            return Err(Error::unsupported_type(
                "sequences nested directly inside sequences",
            ));
        }

        self.groups.push(with_children(Node::new_group(), children));
        Ok(())
    }

    fn finish(self) -> Result<Content> {
        Ok(wrap_variant(self.variant, self.groups))
    }
}

impl ser::SerializeSeq for SerializeElements {
    type Ok = Content;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Content> {
        self.finish()
    }
}

impl ser::SerializeTuple for SerializeElements {
    type Ok = Content;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Content> {
        self.finish()
    }
}

impl ser::SerializeTupleStruct for SerializeElements {
    type Ok = Content;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Content> {
        self.finish()
    }
}

impl ser::SerializeTupleVariant for SerializeElements {
    type Ok = Content;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Content> {
        self.finish()
    }
}

impl SerializeFields {
    fn new(len: usize, variant: Option<&'static str>) -> Self {
        SerializeFields {
            keys: Vec::with_capacity(len),
            pending_key: None,
            variant,
        }
    }

    fn push<T>(&mut self, key: String, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if let Some(children) = value.serialize(NodeSerializer)? {
            self.keys.push(with_children(Node::new_key(key), children));
        }
        Ok(())
    }

    fn finish(self) -> Result<Content> {
        Ok(wrap_variant(self.variant, self.keys))
    }
}

impl ser::SerializeMap for SerializeFields {
    type Ok = Content;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match key.serialize(NodeSerializer)?.as_deref() {
            Some([only]) if only.is_value() => {
                self.pending_key = Some(only.text.clone());
                Ok(())
            }
            _ => Err(Error::unsupported_type("map keys must be scalars")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.push(key, value)
    }

    fn end(self) -> Result<Content> {
        self.finish()
    }
}

impl ser::SerializeStruct for SerializeFields {
    type Ok = Content;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(key.to_string(), value)
    }

    fn end(self) -> Result<Content> {
        self.finish()
    }
}

impl ser::SerializeStructVariant for SerializeFields {
    type Ok = Content;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(key.to_string(), value)
    }

    fn end(self) -> Result<Content> {
        self.finish()
    }
}

/// Converts `value` into a canonical document root.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if `value` is not a struct, map or
/// enum variant with named content, or contains a shape papr cannot express.
pub fn to_node<T>(value: &T) -> Result<Node>
where
    T: ?Sized + Serialize,
{
    let children = value.serialize(NodeSerializer)?.unwrap_or_default();

    if !children.iter().all(Node::has_key) {
        return Err(Error::unsupported_type(
            "a papr document must be a struct or a map at the top level",
        ));
    }

    let mut root = with_children(Node::new_root(), children);
    root.simplify();
    Ok(root)
}
